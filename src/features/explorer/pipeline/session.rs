//! The map explorer: one owning object for the whole pipeline.
//!
//! It holds the map surface (camera, marker layers, open popup) as private
//! state and drives proximity filtering, text search, marker rendering,
//! viewport tracking and selection navigation. The parent hears about user
//! actions only through [`ExplorerObserver`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::core::config::ExplorerConfig;
use crate::features::explorer::pipeline::derived::DerivedPlace;
use crate::features::explorer::pipeline::geo::{BoundingBox, Coordinate};
use crate::features::explorer::pipeline::geolocation::{
    Delivery, GeolocationError, GeolocationState,
};
use crate::features::explorer::pipeline::markers::{
    ClusterSettings, MarkerLayers, MarkerRenderer,
};
use crate::features::explorer::pipeline::navigation::{FlyTo, SelectionNavigator};
use crate::features::explorer::pipeline::proximity::{filter_by_proximity, ProximitySettings};
use crate::features::explorer::pipeline::search::filter_by_text;
use crate::features::explorer::pipeline::viewport::{
    viewport_bounds, visible_place_ids, MapViewState, ViewportLimits, ViewportSize,
};
use crate::features::places::models::Place;
use crate::shared::constants::MAX_MERCATOR_LAT;

/// Largest viewport edge accepted, in CSS pixels
const MAX_VIEWPORT_EDGE_PX: u32 = 16_384;

/// Outbound callbacks, one call per discrete user-visible event
pub trait ExplorerObserver {
    fn place_selected(&mut self, place: &Place);
    fn zoom_changed(&mut self, zoom: f64);
    fn center_changed(&mut self, center: Coordinate);
}

/// Observer that records events for the caller to drain
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ExplorerEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExplorerEvent {
    PlaceSelected { place_id: i64 },
    ZoomChanged { zoom: f64 },
    CenterChanged { center: Coordinate },
}

impl EventQueue {
    pub fn drain(&mut self) -> Vec<ExplorerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ExplorerObserver for EventQueue {
    fn place_selected(&mut self, place: &Place) {
        self.events.push(ExplorerEvent::PlaceSelected { place_id: place.id });
    }

    fn zoom_changed(&mut self, zoom: f64) {
        self.events.push(ExplorerEvent::ZoomChanged { zoom });
    }

    fn center_changed(&mut self, center: Coordinate) {
        self.events.push(ExplorerEvent::CenterChanged { center });
    }
}

/// Instructions for the client-side map engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    FlyTo { center: Coordinate, zoom: f64 },
    OpenPopup { place_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapInitError {
    #[error("viewport must be between 1 and {max} pixels on each side, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32, max: u32 },
    #[error("initial center ({lat}, {lng}) is not a valid coordinate")]
    InvalidCenter { lat: f64, lng: f64 },
    #[error("zoom limits are inconsistent (min {min}, max {max})")]
    InvalidZoomRange { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("place {0} is not in the place list")]
    UnknownPlace(i64),
    #[error("place {0} has no marker on the map")]
    NotOnMap(i64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerSettings {
    pub proximity: ProximitySettings,
    pub clustering: ClusterSettings,
    pub limits: ViewportLimits,
    pub selection_min_zoom: f64,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            proximity: ProximitySettings::default(),
            clustering: ClusterSettings::default(),
            limits: ViewportLimits::default(),
            selection_min_zoom: 12.0,
        }
    }
}

impl From<&ExplorerConfig> for ExplorerSettings {
    fn from(config: &ExplorerConfig) -> Self {
        Self {
            proximity: config.proximity(),
            clustering: config.clustering(),
            limits: config.viewport_limits(),
            selection_min_zoom: config.selection_min_zoom,
        }
    }
}

/// Initial props for a new explorer
#[derive(Debug, Clone)]
pub struct MountOptions {
    pub places: Vec<Place>,
    pub center: Coordinate,
    pub zoom: f64,
    pub size: ViewportSize,
    pub clustering: bool,
    pub query: String,
}

/// Map engine state owned by one explorer
struct MapSurface {
    view: MapViewState,
    size: ViewportSize,
    layers: MarkerLayers,
    open_popup: Option<i64>,
    commands: Vec<MapCommand>,
}

pub struct MapExplorer<O: ExplorerObserver> {
    settings: ExplorerSettings,
    renderer: MarkerRenderer,
    navigator: SelectionNavigator,
    observer: O,
    surface: MapSurface,
    mounted: bool,

    places: Vec<Place>,
    geolocation: GeolocationState,
    query: String,
    clustering: bool,
    selected_id: Option<i64>,

    filtered: Vec<DerivedPlace>,
    radius_mode: bool,
    radius_fallback: bool,
    bounds: BoundingBox,
    visible: Vec<i64>,
}

impl<O: ExplorerObserver> MapExplorer<O> {
    /// Create the map surface and run the pipeline once.
    /// Fails without side effects when the surface cannot be initialized.
    pub fn mount(
        settings: ExplorerSettings,
        options: MountOptions,
        observer: O,
    ) -> Result<Self, MapInitError> {
        validate_size(options.size)?;
        if !options.center.is_valid() {
            return Err(MapInitError::InvalidCenter {
                lat: options.center.lat,
                lng: options.center.lng,
            });
        }
        let limits = settings.limits;
        if !(limits.min_zoom.is_finite()
            && limits.max_zoom.is_finite()
            && limits.min_zoom <= limits.max_zoom)
        {
            return Err(MapInitError::InvalidZoomRange {
                min: limits.min_zoom,
                max: limits.max_zoom,
            });
        }

        let view = MapViewState {
            center: normalize_center(options.center),
            zoom: limits.clamp_zoom(options.zoom),
            bearing: 0.0,
        };

        let mut explorer = Self {
            renderer: MarkerRenderer::new(settings.clustering),
            navigator: SelectionNavigator::new(settings.selection_min_zoom),
            settings,
            observer,
            surface: MapSurface {
                view,
                size: options.size,
                layers: MarkerLayers::empty(),
                open_popup: None,
                commands: Vec::new(),
            },
            mounted: true,
            places: options.places,
            geolocation: GeolocationState::Pending,
            query: options.query,
            clustering: options.clustering,
            selected_id: None,
            filtered: Vec::new(),
            radius_mode: true,
            radius_fallback: false,
            bounds: viewport_bounds(&view, options.size),
            visible: Vec::new(),
        };
        explorer.recompute();

        tracing::debug!(
            "Map explorer mounted with {} places ({} on map)",
            explorer.places.len(),
            explorer.filtered.len()
        );

        Ok(explorer)
    }

    /// Tear down the surface. Every later call becomes a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.surface.layers = MarkerLayers::empty();
        self.surface.open_popup = None;
        self.surface.commands.clear();
        tracing::debug!("Map explorer unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the place list (new fetch result)
    pub fn set_places(&mut self, places: Vec<Place>) {
        if !self.mounted {
            return;
        }
        self.places = places;
        if let Some(id) = self.selected_id {
            if !self.places.iter().any(|p| p.id == id) {
                tracing::debug!("Selected place {} disappeared from the list", id);
                self.selected_id = None;
                self.surface.open_popup = None;
                self.navigator.on_selection(None, self.surface.view.zoom);
            }
        }
        self.recompute();
    }

    /// Deliver the one-shot geolocation result
    pub fn resolve_geolocation(
        &mut self,
        result: Result<Coordinate, GeolocationError>,
    ) -> Delivery {
        if !self.mounted {
            tracing::debug!("Discarding geolocation result delivered after unmount");
            return Delivery::Discarded;
        }
        let delivery = self.geolocation.resolve(result);
        if delivery == Delivery::Applied {
            self.recompute();
        }
        delivery
    }

    pub fn set_query(&mut self, query: String) {
        if !self.mounted || query == self.query {
            return;
        }
        self.query = query;
        self.recompute();
    }

    pub fn set_clustering(&mut self, enabled: bool) {
        if !self.mounted || enabled == self.clustering {
            return;
        }
        self.clustering = enabled;
        self.update_markers();
    }

    /// Selection driven by the parent. Does not call back into the observer.
    pub fn select_place(&mut self, place_id: Option<i64>) -> Result<(), SelectionError> {
        if !self.mounted {
            return Ok(());
        }
        if let Some(id) = place_id {
            if !self.places.iter().any(|p| p.id == id) {
                return Err(SelectionError::UnknownPlace(id));
            }
        }
        if place_id == self.selected_id {
            return Ok(());
        }

        self.selected_id = place_id;
        self.surface.open_popup = None;
        self.update_markers();
        self.navigate_to_selection();
        Ok(())
    }

    /// A user clicked a marker: notify the parent, then select the place
    pub fn click_marker(&mut self, place_id: i64) -> Result<(), SelectionError> {
        if !self.mounted {
            return Ok(());
        }
        if !self.surface.layers.contains_place(place_id) {
            return Err(SelectionError::NotOnMap(place_id));
        }
        let place = self
            .places
            .iter()
            .find(|p| p.id == place_id)
            .ok_or(SelectionError::UnknownPlace(place_id))?;

        self.observer.place_selected(place);
        self.select_place(Some(place_id))
    }

    /// Pan/zoom completed on the client
    pub fn move_end(&mut self, center: Coordinate, zoom: f64, bearing: Option<f64>) {
        if !self.mounted {
            return;
        }
        let bearing = bearing
            .filter(|b| b.is_finite())
            .unwrap_or(self.surface.view.bearing);
        self.apply_view(center, zoom, bearing);
    }

    pub fn resize(&mut self, size: ViewportSize) -> Result<(), MapInitError> {
        validate_size(size)?;
        if !self.mounted || size == self.surface.size {
            return Ok(());
        }
        self.surface.size = size;
        self.update_visible();
        Ok(())
    }

    /// Rebuild every marker layer from the filtered list and the selection
    pub fn update_markers(&mut self) {
        if !self.mounted {
            return;
        }
        self.surface.layers = self.renderer.render(
            &self.filtered,
            self.selected_id,
            self.clustering,
            self.surface.view.zoom,
        );
    }

    pub fn take_commands(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.surface.commands)
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn filtered_places(&self) -> &[DerivedPlace] {
        &self.filtered
    }

    pub fn layers(&self) -> &MarkerLayers {
        &self.surface.layers
    }

    pub fn view(&self) -> MapViewState {
        self.surface.view
    }

    pub fn size(&self) -> ViewportSize {
        self.surface.size
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn visible_place_ids(&self) -> &[i64] {
        &self.visible
    }

    pub fn open_popup(&self) -> Option<i64> {
        self.surface.open_popup
    }

    pub fn geolocation(&self) -> GeolocationState {
        self.geolocation
    }

    pub fn radius_mode(&self) -> bool {
        self.radius_mode
    }

    pub fn radius_fallback(&self) -> bool {
        self.radius_fallback
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn clustering(&self) -> bool {
        self.clustering
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    fn recompute(&mut self) {
        let outcome =
            filter_by_proximity(&self.places, &self.geolocation, &self.settings.proximity);
        self.radius_mode = outcome.radius_mode;
        self.radius_fallback = outcome.radius_fallback;
        self.filtered = filter_by_text(outcome.places, &self.query);

        self.update_markers();
        self.update_visible();
    }

    fn update_visible(&mut self) {
        self.bounds = viewport_bounds(&self.surface.view, self.surface.size);
        self.visible = visible_place_ids(&self.filtered, &self.bounds);
    }

    fn navigate_to_selection(&mut self) {
        let selected = self
            .selected_id
            .and_then(|id| self.places.iter().find(|p| p.id == id));
        let Some(FlyTo {
            place_id,
            center,
            zoom,
        }) = self.navigator.on_selection(selected, self.surface.view.zoom)
        else {
            return;
        };

        let zoom = self.settings.limits.clamp_zoom(zoom);
        self.surface
            .commands
            .push(MapCommand::FlyTo { center, zoom });
        self.apply_view(center, zoom, self.surface.view.bearing);

        self.surface.open_popup = Some(place_id);
        self.surface.commands.push(MapCommand::OpenPopup { place_id });
    }

    fn apply_view(&mut self, center: Coordinate, zoom: f64, bearing: f64) {
        let previous = self.surface.view;
        let view = MapViewState {
            center: normalize_center(center),
            zoom: self.settings.limits.clamp_zoom(zoom),
            bearing,
        };
        self.surface.view = view;

        if view.zoom != previous.zoom {
            self.observer.zoom_changed(view.zoom);
            // Cluster membership depends on zoom
            self.update_markers();
        }
        if view.center != previous.center {
            self.observer.center_changed(view.center);
        }
        self.update_visible();
    }
}

fn validate_size(size: ViewportSize) -> Result<(), MapInitError> {
    let edge = 1..=MAX_VIEWPORT_EDGE_PX;
    if edge.contains(&size.width) && edge.contains(&size.height) {
        Ok(())
    } else {
        Err(MapInitError::InvalidViewport {
            width: size.width,
            height: size.height,
            max: MAX_VIEWPORT_EDGE_PX,
        })
    }
}

/// Clamp to Mercator latitudes and wrap longitude into [-180, 180]
fn normalize_center(center: Coordinate) -> Coordinate {
    let lat = if center.lat.is_finite() {
        center.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
    } else {
        0.0
    };
    let lng = if !center.lng.is_finite() {
        0.0
    } else if (-180.0..=180.0).contains(&center.lng) {
        center.lng
    } else {
        (center.lng + 180.0).rem_euclid(360.0) - 180.0
    };
    Coordinate::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::explorer::pipeline::markers::LayerMode;
    use crate::shared::test_helpers::{place_at, sample_place};

    fn goa_places() -> Vec<Place> {
        vec![
            Place {
                name: "Baga Beach".to_string(),
                location: Some("Goa".to_string()),
                rating_sum: 9.0,
                rating_count: 2,
                ..place_at(1, 15.5553, 73.7517)
            },
            Place {
                name: "Fort Aguada".to_string(),
                location: Some("Goa".to_string()),
                ..place_at(2, 15.4920, 73.7737)
            },
            Place {
                name: "Hampi".to_string(),
                state: Some("Karnataka".to_string()),
                ..place_at(3, 15.3350, 76.4600)
            },
            Place {
                name: "Rohtang Pass".to_string(),
                state: Some("Himachal Pradesh".to_string()),
                ..place_at(4, 32.3716, 77.2466)
            },
            Place {
                name: "Unmapped Lake".to_string(),
                state: Some("Goa".to_string()),
                ..sample_place(5, "Unmapped Lake")
            },
        ]
    }

    fn mount() -> MapExplorer<EventQueue> {
        MapExplorer::mount(
            ExplorerSettings::default(),
            MountOptions {
                places: goa_places(),
                center: Coordinate::new(20.5937, 78.9629),
                zoom: 5.0,
                size: ViewportSize {
                    width: 1024,
                    height: 768,
                },
                clustering: true,
                query: String::new(),
            },
            EventQueue::default(),
        )
        .unwrap()
    }

    fn filtered_ids(explorer: &MapExplorer<EventQueue>) -> Vec<i64> {
        explorer.filtered_places().iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_mount_rejects_empty_viewport() {
        let result = MapExplorer::mount(
            ExplorerSettings::default(),
            MountOptions {
                places: goa_places(),
                center: Coordinate::new(20.0, 78.0),
                zoom: 5.0,
                size: ViewportSize {
                    width: 0,
                    height: 600,
                },
                clustering: true,
                query: String::new(),
            },
            EventQueue::default(),
        );

        assert!(matches!(
            result,
            Err(MapInitError::InvalidViewport { width: 0, .. })
        ));
    }

    #[test]
    fn test_mount_rejects_invalid_center() {
        let result = MapExplorer::mount(
            ExplorerSettings::default(),
            MountOptions {
                places: Vec::new(),
                center: Coordinate::new(f64::NAN, 78.0),
                zoom: 5.0,
                size: ViewportSize {
                    width: 800,
                    height: 600,
                },
                clustering: true,
                query: String::new(),
            },
            EventQueue::default(),
        );

        assert!(matches!(result, Err(MapInitError::InvalidCenter { .. })));
    }

    #[test]
    fn test_unmapped_place_never_becomes_marker() {
        let explorer = mount();

        assert!(!explorer.layers().contains_place(5));
        assert!(explorer.places().iter().any(|p| p.id == 5));
        assert_eq!(explorer.layers().marker_count(), 4);
    }

    #[test]
    fn test_geolocation_restricts_to_radius() {
        let mut explorer = mount();

        let delivery = explorer.resolve_geolocation(Ok(Coordinate::new(15.50, 73.80)));

        assert_eq!(delivery, Delivery::Applied);
        assert_eq!(filtered_ids(&explorer), vec![2, 1, 3]);
        assert!(explorer.radius_mode());
        assert!(!explorer.radius_fallback());
    }

    #[test]
    fn test_geolocation_failure_disables_radius_mode() {
        let mut explorer = mount();

        explorer.resolve_geolocation(Err(GeolocationError::PermissionDenied));

        assert!(!explorer.radius_mode());
        assert_eq!(filtered_ids(&explorer), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_second_geolocation_result_is_ignored() {
        let mut explorer = mount();
        explorer.resolve_geolocation(Err(GeolocationError::Timeout));

        let late = explorer.resolve_geolocation(Ok(Coordinate::new(15.5, 73.8)));

        assert_eq!(late, Delivery::AlreadyResolved);
        assert!(!explorer.radius_mode());
    }

    #[test]
    fn test_geolocation_after_unmount_is_discarded() {
        let mut explorer = mount();
        explorer.unmount();

        let delivery = explorer.resolve_geolocation(Ok(Coordinate::new(15.5, 73.8)));

        assert_eq!(delivery, Delivery::Discarded);
        assert!(explorer.geolocation().is_pending());
        assert_eq!(explorer.layers().marker_count(), 0);
    }

    #[test]
    fn test_search_layers_on_proximity() {
        let mut explorer = mount();
        explorer.resolve_geolocation(Ok(Coordinate::new(15.50, 73.80)));

        explorer.set_query("GOA".to_string());

        assert_eq!(filtered_ids(&explorer), vec![2, 1]);
        assert_eq!(explorer.layers().marker_count(), 2);
    }

    #[test]
    fn test_selection_flies_once_and_opens_popup() {
        let mut explorer = mount();

        explorer.select_place(Some(3)).unwrap();
        let commands = explorer.take_commands();
        explorer.select_place(Some(3)).unwrap();
        explorer.update_markers();

        assert_eq!(
            commands,
            vec![
                MapCommand::FlyTo {
                    center: Coordinate::new(15.3350, 76.4600),
                    zoom: 12.0
                },
                MapCommand::OpenPopup { place_id: 3 },
            ]
        );
        assert!(explorer.take_commands().is_empty());
        assert_eq!(explorer.open_popup(), Some(3));
        assert_eq!(explorer.view().zoom, 12.0);
        assert_eq!(explorer.layers().selected.as_ref().unwrap().place_id, 3);
    }

    #[test]
    fn test_navigation_reports_zoom_and_center_once() {
        let mut explorer = mount();

        explorer.select_place(Some(3)).unwrap();

        let events = explorer.observer_mut().drain();
        assert_eq!(
            events,
            vec![
                ExplorerEvent::ZoomChanged { zoom: 12.0 },
                ExplorerEvent::CenterChanged {
                    center: Coordinate::new(15.3350, 76.4600)
                },
            ]
        );
    }

    #[test]
    fn test_select_unknown_place_fails() {
        let mut explorer = mount();
        assert_eq!(
            explorer.select_place(Some(99)),
            Err(SelectionError::UnknownPlace(99))
        );
    }

    #[test]
    fn test_selecting_unmapped_place_does_not_animate() {
        let mut explorer = mount();

        explorer.select_place(Some(5)).unwrap();

        assert!(explorer.take_commands().is_empty());
        assert!(explorer.layers().selected.is_none());
    }

    #[test]
    fn test_popup_closes_when_selection_moves_to_unmapped_place() {
        let mut explorer = mount();
        explorer.select_place(Some(1)).unwrap();
        assert_eq!(explorer.open_popup(), Some(1));

        explorer.select_place(Some(5)).unwrap();

        assert_eq!(explorer.selected_id(), Some(5));
        assert_eq!(explorer.open_popup(), None);
    }

    #[test]
    fn test_click_marker_notifies_observer() {
        let mut explorer = mount();
        explorer.move_end(Coordinate::new(15.5, 73.8), 16.0, None);
        explorer.observer_mut().drain();

        explorer.click_marker(2).unwrap();

        let events = explorer.observer_mut().drain();
        assert_eq!(events[0], ExplorerEvent::PlaceSelected { place_id: 2 });
        assert_eq!(explorer.selected_id(), Some(2));
    }

    #[test]
    fn test_click_on_hidden_place_is_rejected() {
        let mut explorer = mount();
        explorer.set_query("hampi".to_string());

        assert_eq!(explorer.click_marker(1), Err(SelectionError::NotOnMap(1)));
        assert!(explorer.observer_mut().drain().is_empty());
    }

    #[test]
    fn test_zoom_floor_snaps_back() {
        let mut explorer = mount();

        explorer.move_end(Coordinate::new(20.5937, 78.9629), 1.0, None);

        assert_eq!(explorer.view().zoom, 3.0);
        assert_eq!(
            explorer.observer_mut().drain(),
            vec![ExplorerEvent::ZoomChanged { zoom: 3.0 }]
        );
    }

    #[test]
    fn test_viewport_tracks_visible_places() {
        let mut explorer = mount();

        explorer.move_end(Coordinate::new(15.52, 73.76), 11.0, None);

        assert_eq!(explorer.visible_place_ids(), &[1, 2]);
        assert_eq!(explorer.layers().marker_count(), 4);
    }

    #[test]
    fn test_clustering_toggle_rebuilds_layers() {
        let mut explorer = mount();
        assert_eq!(explorer.layers().mode, LayerMode::Clustered);

        explorer.set_clustering(false);
        assert_eq!(explorer.layers().mode, LayerMode::Flat);
        assert_eq!(explorer.layers().items.len(), 4);
    }

    #[test]
    fn test_set_places_drops_vanished_selection() {
        let mut explorer = mount();
        explorer.select_place(Some(1)).unwrap();

        let remaining: Vec<Place> = goa_places().into_iter().filter(|p| p.id != 1).collect();
        explorer.set_places(remaining);

        assert_eq!(explorer.selected_id(), None);
        assert_eq!(explorer.open_popup(), None);
        assert!(!explorer.layers().contains_place(1));
    }

    #[test]
    fn test_unmounted_explorer_ignores_input() {
        let mut explorer = mount();
        explorer.unmount();

        explorer.set_query("goa".to_string());
        explorer.move_end(Coordinate::new(15.5, 73.8), 10.0, None);

        assert!(!explorer.is_mounted());
        assert_eq!(explorer.query(), "");
        assert!(explorer.observer_mut().drain().is_empty());
    }
}
