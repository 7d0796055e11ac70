//! Client for the upstream places API
//!
//! The upstream owns place data (admin CRUD, ratings, images); this service
//! only reads the full list.

mod places_api_client;

pub use places_api_client::{parse_places, PlacesApiClient};
