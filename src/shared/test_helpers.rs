use crate::features::places::models::Place;

use fake::{faker::address::en::CityName, Fake};

/// Bare place with only id and name set
pub fn sample_place(id: i64, name: &str) -> Place {
    Place {
        id,
        name: name.to_string(),
        description: None,
        location: None,
        district: None,
        state: None,
        locality: None,
        pin_code: None,
        latitude: None,
        longitude: None,
        image_url: None,
        rating_sum: 0.0,
        rating_count: 0,
        tags: Vec::new(),
        themes: Vec::new(),
        details: Vec::new(),
        visitors: None,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: None,
        previous_update: None,
    }
}

/// Place at a coordinate
pub fn place_at(id: i64, lat: f64, lng: f64) -> Place {
    Place {
        latitude: Some(lat),
        longitude: Some(lng),
        ..sample_place(id, &format!("Place {}", id))
    }
}

/// Randomly named places scattered over a lat/lng window
pub fn random_places(count: usize, lat: (f64, f64), lng: (f64, f64)) -> Vec<Place> {
    (0..count)
        .map(|i| Place {
            latitude: Some((lat.0..lat.1).fake::<f64>()),
            longitude: Some((lng.0..lng.1).fake::<f64>()),
            location: Some(CityName().fake::<String>()),
            ..sample_place(i as i64 + 1, &CityName().fake::<String>())
        })
        .collect()
}
