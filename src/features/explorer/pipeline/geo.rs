//! Geographic primitives: coordinates, great-circle distance, bounding boxes
//! and the Web Mercator projection used for pixel-space work.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use utoipa::ToSchema;

use crate::shared::constants::{EARTH_RADIUS_KM, MAX_MERCATOR_LAT, TILE_SIZE_PX};

/// A WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside [-90, 90] x [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle distance in kilometres (haversine, atan2 form)
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Axis-aligned geographic box. `west > east` means the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub const WORLD: BoundingBox = BoundingBox {
        south: -MAX_MERCATOR_LAT,
        west: -180.0,
        north: MAX_MERCATOR_LAT,
        east: 180.0,
    };

    pub fn contains(&self, point: Coordinate) -> bool {
        if point.lat < self.south || point.lat > self.north {
            return false;
        }
        if self.west <= self.east {
            point.lng >= self.west && point.lng <= self.east
        } else {
            point.lng >= self.west || point.lng <= self.east
        }
    }

    /// Smallest box enclosing every point; `None` for an empty iterator
    pub fn enclosing(points: impl IntoIterator<Item = Coordinate>) -> Option<BoundingBox> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => BoundingBox {
                    south: p.lat,
                    west: p.lng,
                    north: p.lat,
                    east: p.lng,
                },
                Some(b) => BoundingBox {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lng),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lng),
                },
            })
        })
    }
}

/// A point in world pixel space at some zoom level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn distance_to(&self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Full world width in pixels at `zoom`
pub fn world_size_px(zoom: f64) -> f64 {
    TILE_SIZE_PX * 2f64.powf(zoom)
}

/// Spherical Web Mercator forward projection
pub fn project(point: Coordinate, zoom: f64) -> PixelPoint {
    let size = world_size_px(zoom);
    let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();

    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - ((PI / 4.0 + lat / 2.0).tan()).ln() / PI) / 2.0 * size;

    PixelPoint { x, y }
}

/// Inverse of [`project`]; longitudes outside the world are not wrapped
pub fn unproject(point: PixelPoint, zoom: f64) -> Coordinate {
    let size = world_size_px(zoom);

    let lng = point.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * point.y / size;
    let lat = n.sinh().atan().to_degrees();

    Coordinate::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Mumbai to Pune, roughly 120km great-circle
        let mumbai = Coordinate::new(19.0760, 72.8777);
        let pune = Coordinate::new(18.5204, 73.8567);

        let distance = haversine_km(mumbai, pune);

        assert!(distance > 115.0 && distance < 125.0, "got {}", distance);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let goa = Coordinate::new(15.2993, 74.1240);
        assert!(haversine_km(goa, goa) < 1e-9);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = Coordinate::new(10.0, 10.0);
        let b = Coordinate::new(80.0, 80.0);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox {
            south: 10.0,
            west: 70.0,
            north: 20.0,
            east: 80.0,
        };
        assert!(bbox.contains(Coordinate::new(15.0, 75.0)));
        assert!(bbox.contains(Coordinate::new(10.0, 70.0)));
        assert!(!bbox.contains(Coordinate::new(25.0, 75.0)));
        assert!(!bbox.contains(Coordinate::new(15.0, 85.0)));
    }

    #[test]
    fn test_bounding_box_across_antimeridian() {
        let bbox = BoundingBox {
            south: -10.0,
            west: 170.0,
            north: 10.0,
            east: -170.0,
        };
        assert!(bbox.contains(Coordinate::new(0.0, 175.0)));
        assert!(bbox.contains(Coordinate::new(0.0, -175.0)));
        assert!(!bbox.contains(Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_enclosing_box() {
        let bbox = BoundingBox::enclosing([
            Coordinate::new(15.0, 74.0),
            Coordinate::new(12.0, 77.5),
            Coordinate::new(18.0, 73.0),
        ])
        .unwrap();
        assert_eq!(bbox.south, 12.0);
        assert_eq!(bbox.north, 18.0);
        assert_eq!(bbox.west, 73.0);
        assert_eq!(bbox.east, 77.5);
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_projection_round_trip_and_origin() {
        let origin = project(Coordinate::new(0.0, 0.0), 0.0);
        assert!((origin.x - 128.0).abs() < 1e-9);
        assert!((origin.y - 128.0).abs() < 1e-9);

        let delhi = Coordinate::new(28.6139, 77.2090);
        let back = unproject(project(delhi, 7.0), 7.0);
        assert!((back.lat - delhi.lat).abs() < 1e-9);
        assert!((back.lng - delhi.lng).abs() < 1e-9);
    }
}
