use crate::features::explorer::pipeline::geo::Coordinate;
use crate::features::places::models::Place;

/// A place prepared for the map: validated coordinate, optional distance from
/// the user, and placeholders for fields the listing UI always expects.
///
/// Rebuilt on every geolocation or place-list change; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPlace {
    pub place: Place,
    pub coordinates: Coordinate,
    /// Kilometres from the user, when the user's position is known
    pub distance_km: Option<f64>,
    pub visitors: i64,
}

impl DerivedPlace {
    /// `None` when the place has no usable coordinate
    pub fn from_place(place: &Place) -> Option<Self> {
        let coordinates = place.coordinates()?;
        Some(Self {
            coordinates,
            distance_km: None,
            visitors: place.visitors.unwrap_or(0),
            place: place.clone(),
        })
    }

    pub fn id(&self) -> i64 {
        self.place.id
    }
}
