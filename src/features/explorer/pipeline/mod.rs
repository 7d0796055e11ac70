//! Pure map-explorer pipeline: proximity, search, markers, viewport and
//! selection navigation, tied together by [`MapExplorer`].

pub mod derived;
pub mod geo;
pub mod geolocation;
pub mod markers;
pub mod navigation;
pub mod proximity;
pub mod search;
pub mod session;
pub mod viewport;

pub use derived::DerivedPlace;
pub use geo::{haversine_km, BoundingBox, Coordinate};
pub use geolocation::{Delivery, GeolocationError, GeolocationState};
pub use markers::{
    Cluster, ClusterSettings, LayerItem, LayerMode, Marker, MarkerBadge, MarkerLayers,
    MarkerRenderer, MarkerStyle, SkippedMarker,
};
pub use navigation::{FlyTo, SelectionNavigator};
pub use proximity::{filter_by_proximity, ProximityOutcome, ProximitySettings, RadiusPolicy};
pub use search::{filter_by_text, matches_query};
pub use session::{
    EventQueue, ExplorerEvent, ExplorerObserver, ExplorerSettings, MapCommand, MapExplorer,
    MapInitError, MountOptions, SelectionError,
};
pub use viewport::{
    viewport_bounds, visible_place_ids, MapViewState, ViewportLimits, ViewportSize,
};
