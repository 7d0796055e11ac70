use crate::features::explorer::pipeline::geo::Coordinate;
use crate::features::places::models::Place;

/// Camera move requested when the selection changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub place_id: i64,
    pub center: Coordinate,
    pub zoom: f64,
}

/// Turns selection changes into at most one fly-to per distinct selection.
/// Keyed on place id, so re-rendering with an equal selection is a no-op.
#[derive(Debug, Clone)]
pub struct SelectionNavigator {
    min_zoom: f64,
    last_selected: Option<i64>,
}

impl SelectionNavigator {
    pub fn new(min_zoom: f64) -> Self {
        Self {
            min_zoom,
            last_selected: None,
        }
    }

    pub fn on_selection(&mut self, selected: Option<&Place>, current_zoom: f64) -> Option<FlyTo> {
        let id = selected.map(|p| p.id);
        if id == self.last_selected {
            return None;
        }
        self.last_selected = id;

        let place = selected?;
        let center = place.coordinates()?;

        Some(FlyTo {
            place_id: place.id,
            center,
            zoom: current_zoom.max(self.min_zoom),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{place_at, sample_place};

    #[test]
    fn test_fly_to_once_per_selection() {
        let mut nav = SelectionNavigator::new(12.0);
        let place = place_at(1, 15.5, 73.8);

        let first = nav.on_selection(Some(&place), 5.0);
        let again = nav.on_selection(Some(&place.clone()), 5.0);

        assert_eq!(
            first,
            Some(FlyTo {
                place_id: 1,
                center: Coordinate::new(15.5, 73.8),
                zoom: 12.0,
            })
        );
        assert_eq!(again, None);
    }

    #[test]
    fn test_keeps_closer_zoom() {
        let mut nav = SelectionNavigator::new(12.0);
        let fly = nav.on_selection(Some(&place_at(1, 15.5, 73.8)), 14.5).unwrap();
        assert_eq!(fly.zoom, 14.5);
    }

    #[test]
    fn test_switching_selection_animates_each_time() {
        let mut nav = SelectionNavigator::new(12.0);
        let a = place_at(1, 15.5, 73.8);
        let b = place_at(2, 12.9, 77.6);

        assert!(nav.on_selection(Some(&a), 5.0).is_some());
        assert!(nav.on_selection(Some(&b), 12.0).is_some());
        assert!(nav.on_selection(Some(&a), 12.0).is_some());
    }

    #[test]
    fn test_clearing_selection_resets() {
        let mut nav = SelectionNavigator::new(12.0);
        let a = place_at(1, 15.5, 73.8);

        assert!(nav.on_selection(Some(&a), 5.0).is_some());
        assert!(nav.on_selection(None, 12.0).is_none());
        assert!(nav.on_selection(Some(&a), 12.0).is_some());
    }

    #[test]
    fn test_place_without_coordinates_does_not_animate() {
        let mut nav = SelectionNavigator::new(12.0);
        let unmapped = sample_place(3, "Unmapped");

        assert!(nav.on_selection(Some(&unmapped), 5.0).is_none());
        assert!(nav.on_selection(Some(&unmapped), 5.0).is_none());
    }
}
