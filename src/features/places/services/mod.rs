mod place_catalog_service;
mod place_source;

pub use place_catalog_service::PlaceCatalogService;
pub use place_source::{FilePlaceSource, PlaceSource, StaticPlaceSource};
