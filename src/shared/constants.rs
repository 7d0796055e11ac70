/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// MAP CONSTANTS
// =============================================================================

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Web Mercator tile edge in pixels
pub const TILE_SIZE_PX: f64 = 256.0;

/// Latitude beyond which Web Mercator is undefined
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;
