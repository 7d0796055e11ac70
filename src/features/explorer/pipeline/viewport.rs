use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::explorer::pipeline::derived::DerivedPlace;
use crate::features::explorer::pipeline::geo::{
    project, unproject, world_size_px, BoundingBox, Coordinate, PixelPoint,
};

/// Camera state of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapViewState {
    pub center: Coordinate,
    pub zoom: f64,
    /// Degrees clockwise from north
    #[serde(default)]
    pub bearing: f64,
}

/// Visible map area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_zoom: 3.0,
            max_zoom: 18.0,
        }
    }
}

impl ViewportLimits {
    /// Zooming out past the floor snaps back to the floor
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if !zoom.is_finite() || zoom < self.min_zoom {
            self.min_zoom
        } else {
            zoom.min(self.max_zoom)
        }
    }
}

/// Geographic box covered by the view, enclosing the rotated viewport when
/// the bearing is non-zero
pub fn viewport_bounds(view: &MapViewState, size: ViewportSize) -> BoundingBox {
    let world = world_size_px(view.zoom);
    let center = project(view.center, view.zoom);

    let theta = view.bearing.to_radians();
    let (half_w, half_h) = (size.width as f64 / 2.0, size.height as f64 / 2.0);
    let extent_x = (half_w * theta.cos()).abs() + (half_h * theta.sin()).abs();
    let extent_y = (half_w * theta.sin()).abs() + (half_h * theta.cos()).abs();

    let top = (center.y - extent_y).max(0.0);
    let bottom = (center.y + extent_y).min(world);
    let north = unproject(PixelPoint { x: center.x, y: top }, view.zoom).lat;
    let south = unproject(PixelPoint { x: center.x, y: bottom }, view.zoom).lat;

    if extent_x * 2.0 >= world {
        return BoundingBox {
            south,
            west: -180.0,
            north,
            east: 180.0,
        };
    }

    let west = unproject(
        PixelPoint {
            x: center.x - extent_x,
            y: center.y,
        },
        view.zoom,
    )
    .lng;
    let east = unproject(
        PixelPoint {
            x: center.x + extent_x,
            y: center.y,
        },
        view.zoom,
    )
    .lng;

    BoundingBox {
        south,
        west: wrap_lng(west),
        north,
        east: wrap_lng(east),
    }
}

/// Ids of the places inside `bounds`, in list order
pub fn visible_place_ids(places: &[DerivedPlace], bounds: &BoundingBox) -> Vec<i64> {
    places
        .iter()
        .filter(|p| bounds.contains(p.coordinates))
        .map(|p| p.id())
        .collect()
}

fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::place_at;

    fn view(lat: f64, lng: f64, zoom: f64) -> MapViewState {
        MapViewState {
            center: Coordinate::new(lat, lng),
            zoom,
            bearing: 0.0,
        }
    }

    const SIZE: ViewportSize = ViewportSize {
        width: 800,
        height: 600,
    };

    #[test]
    fn test_zoom_floor_and_ceiling() {
        let limits = ViewportLimits::default();
        assert_eq!(limits.clamp_zoom(1.0), 3.0);
        assert_eq!(limits.clamp_zoom(7.5), 7.5);
        assert_eq!(limits.clamp_zoom(22.0), 18.0);
        assert_eq!(limits.clamp_zoom(f64::NAN), 3.0);
    }

    #[test]
    fn test_bounds_surround_center() {
        let v = view(15.3, 74.1, 10.0);
        let bounds = viewport_bounds(&v, SIZE);

        assert!(bounds.contains(v.center));
        assert!(bounds.south < 15.3 && bounds.north > 15.3);
        assert!(bounds.west < 74.1 && bounds.east > 74.1);
        // 800px at zoom 10 spans ~2.2 degrees of longitude
        let width = bounds.east - bounds.west;
        assert!((width - 800.0 / world_size_px(10.0) * 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_widens_bounds() {
        let flat = viewport_bounds(&view(15.3, 74.1, 10.0), SIZE);
        let rotated = viewport_bounds(
            &MapViewState {
                bearing: 45.0,
                ..view(15.3, 74.1, 10.0)
            },
            SIZE,
        );

        assert!(rotated.north > flat.north);
        assert!(rotated.south < flat.south);
    }

    #[test]
    fn test_world_view_covers_all_longitudes() {
        let bounds = viewport_bounds(&view(0.0, 0.0, 0.0), SIZE);
        assert_eq!(bounds.west, -180.0);
        assert_eq!(bounds.east, 180.0);
    }

    #[test]
    fn test_bounds_across_antimeridian() {
        let bounds = viewport_bounds(&view(-17.7, 179.9, 8.0), SIZE);

        assert!(bounds.west > bounds.east);
        assert!(bounds.contains(Coordinate::new(-17.7, -179.9)));
        assert!(bounds.contains(Coordinate::new(-17.7, 179.5)));
    }

    #[test]
    fn test_visible_places_follow_viewport() {
        let places: Vec<DerivedPlace> = [
            place_at(1, 15.30, 74.10),
            place_at(2, 15.35, 74.15),
            place_at(3, 28.61, 77.21),
        ]
        .iter()
        .filter_map(DerivedPlace::from_place)
        .collect();

        let goa = viewport_bounds(&view(15.3, 74.1, 10.0), SIZE);
        assert_eq!(visible_place_ids(&places, &goa), vec![1, 2]);

        let india = viewport_bounds(&view(22.0, 78.0, 4.0), SIZE);
        assert_eq!(visible_place_ids(&places, &india), vec![1, 2, 3]);
    }
}
