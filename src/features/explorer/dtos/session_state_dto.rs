use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::explorer::pipeline::{
    BoundingBox, Coordinate, Delivery, DerivedPlace, EventQueue, ExplorerEvent, GeolocationError,
    GeolocationState, LayerItem, LayerMode, MapCommand, MapExplorer, MapViewState, Marker,
    MarkerBadge, MarkerLayers, MarkerStyle, RadiusPolicy, ViewportSize,
};

/// Full explorer state returned by every session endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExplorerStateDto {
    pub session_id: Uuid,
    pub view: MapViewState,
    pub size: ViewportSize,
    pub bounds: BoundingBox,
    pub attribution: String,
    pub query: String,
    pub clustering: bool,
    pub selected_place_id: Option<i64>,
    pub open_popup_place_id: Option<i64>,
    pub geolocation: GeolocationStatusDto,
    pub radius: RadiusStatusDto,
    /// Filtered places in display order
    pub places: Vec<ExplorerPlaceDto>,
    pub visible_place_ids: Vec<i64>,
    pub visible_count: usize,
    pub layers: MarkerLayersDto,
    /// Callbacks fired since the previous response
    pub events: Vec<ExplorerEvent>,
    /// Map commands for the client to apply, in order
    pub commands: Vec<MapCommand>,
    /// Outcome of a geolocation delivery, on the geolocation endpoint only
    pub delivery: Option<Delivery>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationStatus {
    Pending,
    Located,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeolocationStatusDto {
    pub status: GeolocationStatus,
    pub position: Option<Coordinate>,
    pub error: Option<GeolocationError>,
}

impl From<GeolocationState> for GeolocationStatusDto {
    fn from(state: GeolocationState) -> Self {
        match state {
            GeolocationState::Pending => Self {
                status: GeolocationStatus::Pending,
                position: None,
                error: None,
            },
            GeolocationState::Located(position) => Self {
                status: GeolocationStatus::Located,
                position: Some(position),
                error: None,
            },
            GeolocationState::Failed(error) => Self {
                status: GeolocationStatus::Failed,
                position: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RadiusStatusDto {
    /// False once geolocation has failed
    pub mode: bool,
    /// True when nothing was inside the radius and the policy decided the result
    pub fallback: bool,
    pub radius_km: f64,
    pub policy: RadiusPolicy,
}

/// Filtered place with the values computed for this session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExplorerPlaceDto {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub image_url: Option<String>,
    pub position: Coordinate,
    /// Kilometres from the user, when the user position is known
    pub distance_km: Option<f64>,
    pub average_rating: Option<f64>,
    pub visitors: i64,
    pub tags: Vec<String>,
}

impl From<&DerivedPlace> for ExplorerPlaceDto {
    fn from(p: &DerivedPlace) -> Self {
        Self {
            id: p.id(),
            name: p.place.name.clone(),
            location: p.place.location.clone(),
            district: p.place.district.clone(),
            state: p.place.state.clone(),
            image_url: p.place.image_url.clone(),
            position: p.coordinates,
            distance_km: p.distance_km,
            average_rating: p.place.average_rating(),
            visitors: p.visitors,
            tags: p.place.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkerDto {
    pub place_id: i64,
    pub title: String,
    pub position: Coordinate,
    pub badge: MarkerBadge,
    pub style: MarkerStyle,
}

impl From<&Marker> for MarkerDto {
    fn from(m: &Marker) -> Self {
        Self {
            place_id: m.place_id,
            title: m.title.clone(),
            position: m.position,
            badge: m.badge.clone(),
            style: m.style,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerItemDto {
    Marker(MarkerDto),
    Cluster {
        center: Coordinate,
        count: usize,
        place_ids: Vec<i64>,
        bounds: BoundingBox,
    },
}

impl From<&LayerItem> for LayerItemDto {
    fn from(item: &LayerItem) -> Self {
        match item {
            LayerItem::Marker(m) => LayerItemDto::Marker(m.into()),
            LayerItem::Cluster(c) => LayerItemDto::Cluster {
                center: c.center,
                count: c.count(),
                place_ids: c.place_ids.clone(),
                bounds: c.bounds,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkippedMarkerDto {
    pub place_id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkerLayersDto {
    pub mode: LayerMode,
    /// Drawn above every other layer
    pub selected: Option<MarkerDto>,
    pub items: Vec<LayerItemDto>,
    pub marker_count: usize,
    pub skipped: Vec<SkippedMarkerDto>,
}

impl From<&MarkerLayers> for MarkerLayersDto {
    fn from(layers: &MarkerLayers) -> Self {
        Self {
            mode: layers.mode,
            selected: layers.selected.as_ref().map(MarkerDto::from),
            items: layers.items.iter().map(LayerItemDto::from).collect(),
            marker_count: layers.marker_count(),
            skipped: layers
                .skipped
                .iter()
                .map(|s| SkippedMarkerDto {
                    place_id: s.place_id,
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

impl ExplorerStateDto {
    /// Snapshot the explorer, draining its pending events and commands
    pub fn capture(
        session_id: Uuid,
        explorer: &mut MapExplorer<EventQueue>,
        attribution: &str,
        delivery: Option<Delivery>,
    ) -> Self {
        let events = explorer.observer_mut().drain();
        let commands = explorer.take_commands();
        let settings = explorer.settings().proximity;
        let visible_place_ids = explorer.visible_place_ids().to_vec();

        Self {
            session_id,
            view: explorer.view(),
            size: explorer.size(),
            bounds: explorer.bounds(),
            attribution: attribution.to_string(),
            query: explorer.query().to_string(),
            clustering: explorer.clustering(),
            selected_place_id: explorer.selected_id(),
            open_popup_place_id: explorer.open_popup(),
            geolocation: explorer.geolocation().into(),
            radius: RadiusStatusDto {
                mode: explorer.radius_mode(),
                fallback: explorer.radius_fallback(),
                radius_km: settings.radius_km,
                policy: settings.policy,
            },
            places: explorer
                .filtered_places()
                .iter()
                .map(ExplorerPlaceDto::from)
                .collect(),
            visible_count: visible_place_ids.len(),
            visible_place_ids,
            layers: explorer.layers().into(),
            events,
            commands,
            delivery,
        }
    }
}
