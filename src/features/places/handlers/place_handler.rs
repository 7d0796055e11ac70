use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::places::dtos::{ListPlacesQuery, PlaceResponseDto};
use crate::features::places::services::PlaceCatalogService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List places
///
/// Returns every place, including those without coordinates that the map
/// never shows.
#[utoipa::path(
    get,
    path = "/api/places",
    params(ListPlacesQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of places", body = ApiResponse<Vec<PlaceResponseDto>>),
        (status = 502, description = "Upstream places API unavailable")
    ),
    tag = "places"
)]
pub async fn list_places(
    State(service): State<Arc<PlaceCatalogService>>,
    Query(query): Query<ListPlacesQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<PlaceResponseDto>>>> {
    let (items, total) = service.list(&query, &pagination).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get place by id
#[utoipa::path(
    get,
    path = "/api/places/{id}",
    params(
        ("id" = i64, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Place found", body = ApiResponse<PlaceResponseDto>),
        (status = 404, description = "Place not found"),
        (status = 502, description = "Upstream places API unavailable")
    ),
    tag = "places"
)]
pub async fn get_place(
    State(service): State<Arc<PlaceCatalogService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PlaceResponseDto>>> {
    let place = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(place), None, None)))
}
