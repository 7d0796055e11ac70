use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::places::models::{Place, PlaceDetail};

/// Text filter for the non-map place listing; paging comes from `PaginationQuery`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListPlacesQuery {
    /// Case-insensitive text filter on name, location, district and state
    pub q: Option<String>,
}

/// Place as listed outside the map, including places without coordinates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub locality: Option<String>,
    pub pin_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// False when the place cannot be shown on the map
    pub has_coordinates: bool,
    pub image_url: Option<String>,
    pub average_rating: Option<f64>,
    pub rating_count: i64,
    pub tags: Vec<String>,
    pub themes: Vec<i32>,
    pub details: Vec<PlaceDetail>,
    pub visitors: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Place> for PlaceResponseDto {
    fn from(p: Place) -> Self {
        Self {
            has_coordinates: p.has_coordinates(),
            average_rating: p.average_rating(),
            id: p.id,
            name: p.name,
            description: p.description,
            location: p.location,
            district: p.district,
            state: p.state,
            locality: p.locality,
            pin_code: p.pin_code,
            latitude: p.latitude,
            longitude: p.longitude,
            image_url: p.image_url,
            rating_count: p.rating_count,
            tags: p.tags,
            themes: p.themes,
            details: p.details,
            visitors: p.visitors,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
