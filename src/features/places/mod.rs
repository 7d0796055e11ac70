//! Place catalog: the raw place list behind the map, plus a non-map listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/places` | List places, optional `q` text filter |
//! | GET | `/api/places/{id}` | Get a single place |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{FilePlaceSource, PlaceCatalogService, PlaceSource, StaticPlaceSource};
