//! Marker rendering and pixel-distance clustering.
//!
//! Every call to [`MarkerRenderer::render`] builds the layers from scratch;
//! there is no diffing against the previous render.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::features::explorer::pipeline::derived::DerivedPlace;
use crate::features::explorer::pipeline::geo::{
    project, unproject, BoundingBox, Coordinate, PixelPoint,
};

/// Marker badge: average rating when the place has ratings, otherwise a pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerBadge {
    Rating { value: f64, label: String },
    Pin,
}

/// Visual treatment; the selected marker is enlarged, recolored and pulsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Standard,
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub place_id: i64,
    pub title: String,
    pub position: Coordinate,
    pub badge: MarkerBadge,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub center: Coordinate,
    pub place_ids: Vec<i64>,
    pub bounds: BoundingBox,
}

impl Cluster {
    pub fn count(&self) -> usize {
        self.place_ids.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerItem {
    Marker(Marker),
    Cluster(Cluster),
}

/// How non-selected markers were laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LayerMode {
    /// Clustering on and active at this zoom
    Clustered,
    /// Clustering on but zoomed in past the threshold
    Exploded,
    /// Clustering switched off
    Flat,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkerError {
    #[error("place {0} has no valid coordinate")]
    InvalidCoordinate(i64),
    #[error("place {0} has unusable rating data")]
    InvalidRating(i64),
}

/// A place that could not be drawn, with the reason
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMarker {
    pub place_id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayers {
    /// Always-on-top layer; never clustered
    pub selected: Option<Marker>,
    pub items: Vec<LayerItem>,
    pub mode: LayerMode,
    pub skipped: Vec<SkippedMarker>,
}

impl MarkerLayers {
    pub fn empty() -> Self {
        Self {
            selected: None,
            items: Vec::new(),
            mode: LayerMode::Flat,
            skipped: Vec::new(),
        }
    }

    /// Number of places drawn, counting cluster members and the selected marker
    pub fn marker_count(&self) -> usize {
        let layered: usize = self
            .items
            .iter()
            .map(|item| match item {
                LayerItem::Marker(_) => 1,
                LayerItem::Cluster(c) => c.count(),
            })
            .sum();
        layered + usize::from(self.selected.is_some())
    }

    pub fn contains_place(&self, place_id: i64) -> bool {
        self.selected.as_ref().is_some_and(|m| m.place_id == place_id)
            || self.items.iter().any(|item| match item {
                LayerItem::Marker(m) => m.place_id == place_id,
                LayerItem::Cluster(c) => c.place_ids.contains(&place_id),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterSettings {
    /// Markers closer than this on screen are merged
    pub radius_px: f64,
    /// At and above this zoom every marker stands alone
    pub disable_at_zoom: f64,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            radius_px: 80.0,
            disable_at_zoom: 15.0,
        }
    }
}

pub struct MarkerRenderer {
    settings: ClusterSettings,
}

impl MarkerRenderer {
    pub fn new(settings: ClusterSettings) -> Self {
        Self { settings }
    }

    /// Build the marker layers for `places` at `zoom`
    pub fn render(
        &self,
        places: &[DerivedPlace],
        selected_id: Option<i64>,
        clustering: bool,
        zoom: f64,
    ) -> MarkerLayers {
        let mut selected = None;
        let mut markers = Vec::with_capacity(places.len());
        let mut skipped = Vec::new();

        for place in places {
            let is_selected = selected_id == Some(place.id());
            match build_marker(place, is_selected) {
                Ok(marker) if is_selected => selected = Some(marker),
                Ok(marker) => markers.push(marker),
                Err(e) => {
                    tracing::warn!("Skipping marker: {}", e);
                    skipped.push(SkippedMarker {
                        place_id: place.id(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mode = if !clustering {
            LayerMode::Flat
        } else if zoom >= self.settings.disable_at_zoom {
            LayerMode::Exploded
        } else {
            LayerMode::Clustered
        };

        let items = match mode {
            LayerMode::Clustered => self.cluster(markers, zoom),
            LayerMode::Exploded | LayerMode::Flat => {
                markers.into_iter().map(LayerItem::Marker).collect()
            }
        };

        MarkerLayers {
            selected,
            items,
            mode,
            skipped,
        }
    }

    /// Greedy clustering at the integer zoom level: each marker joins the
    /// first cluster whose centroid is within the pixel radius.
    fn cluster(&self, markers: Vec<Marker>, zoom: f64) -> Vec<LayerItem> {
        let level = zoom.floor();
        let mut groups: Vec<PendingCluster> = Vec::new();

        for marker in markers {
            let point = project(marker.position, level);
            match groups
                .iter_mut()
                .find(|g| g.centroid.distance_to(point) <= self.settings.radius_px)
            {
                Some(group) => group.add(marker, point),
                None => groups.push(PendingCluster::new(marker, point)),
            }
        }

        groups.into_iter().map(|g| g.finish(level)).collect()
    }
}

struct PendingCluster {
    centroid: PixelPoint,
    members: Vec<Marker>,
}

impl PendingCluster {
    fn new(marker: Marker, point: PixelPoint) -> Self {
        Self {
            centroid: point,
            members: vec![marker],
        }
    }

    // Running mean keeps the centroid where the members are
    fn add(&mut self, marker: Marker, point: PixelPoint) {
        let n = self.members.len() as f64;
        self.centroid = PixelPoint {
            x: (self.centroid.x * n + point.x) / (n + 1.0),
            y: (self.centroid.y * n + point.y) / (n + 1.0),
        };
        self.members.push(marker);
    }

    fn finish(mut self, level: f64) -> LayerItem {
        if self.members.len() == 1 {
            return LayerItem::Marker(self.members.remove(0));
        }

        let bounds = BoundingBox::enclosing(self.members.iter().map(|m| m.position))
            .unwrap_or(BoundingBox::WORLD);

        LayerItem::Cluster(Cluster {
            center: unproject(self.centroid, level),
            place_ids: self.members.iter().map(|m| m.place_id).collect(),
            bounds,
        })
    }
}

fn build_marker(place: &DerivedPlace, selected: bool) -> Result<Marker, MarkerError> {
    if !place.coordinates.is_valid() {
        return Err(MarkerError::InvalidCoordinate(place.id()));
    }

    let badge = match place.place.average_rating() {
        Some(avg) if avg.is_finite() && avg >= 0.0 => {
            let value = (avg * 10.0).round() / 10.0;
            MarkerBadge::Rating {
                value,
                label: format!("{:.1}", value),
            }
        }
        Some(_) => return Err(MarkerError::InvalidRating(place.id())),
        None => MarkerBadge::Pin,
    };

    Ok(Marker {
        place_id: place.id(),
        title: place.place.name.clone(),
        position: place.coordinates,
        badge,
        style: if selected {
            MarkerStyle::Selected
        } else {
            MarkerStyle::Standard
        },
    })
}
