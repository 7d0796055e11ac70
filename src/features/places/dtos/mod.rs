mod place_dto;

pub use place_dto::{ListPlacesQuery, PlaceResponseDto};
