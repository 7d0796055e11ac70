use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::explorer::dtos::{
    CreateSessionDto, ExplorerStateDto, GeolocationResultDto, UpdateClusteringDto,
    UpdateQueryDto, UpdateSelectionDto, ViewportChangeDto,
};
use crate::features::explorer::services::ExplorerService;
use crate::shared::types::ApiResponse;

type StateResponse = Result<Json<ApiResponse<ExplorerStateDto>>>;

fn ok(state: ExplorerStateDto) -> StateResponse {
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Mount a map explorer session
#[utoipa::path(
    post,
    path = "/api/explorer/sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session mounted", body = ApiResponse<ExplorerStateDto>),
        (status = 400, description = "Validation error"),
        (status = 429, description = "Too many open sessions"),
        (status = 502, description = "Upstream places API unavailable"),
        (status = 503, description = "Map could not be initialized")
    ),
    tag = "explorer"
)]
pub async fn create_session(
    State(service): State<Arc<ExplorerService>>,
    AppJson(dto): AppJson<CreateSessionDto>,
) -> Result<(StatusCode, Json<ApiResponse<ExplorerStateDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = service.create_session(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(state),
            Some("Explorer session created".to_string()),
            None,
        )),
    ))
}

/// Get the current state of a session
#[utoipa::path(
    get,
    path = "/api/explorer/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session state", body = ApiResponse<ExplorerStateDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn get_session(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
) -> StateResponse {
    ok(service.get_state(id).await?)
}

/// Unmount a session
#[utoipa::path(
    delete,
    path = "/api/explorer/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session closed"),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn delete_session(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_session(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Explorer session closed".to_string()),
        None,
    )))
}

/// Deliver the one-shot geolocation result
#[utoipa::path(
    post,
    path = "/api/explorer/sessions/{id}/geolocation",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = GeolocationResultDto,
    responses(
        (status = 200, description = "Result delivered; see `delivery`", body = ApiResponse<ExplorerStateDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn resolve_geolocation(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<GeolocationResultDto>,
) -> StateResponse {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    ok(service.resolve_geolocation(id, dto).await?)
}

/// Update the search text
#[utoipa::path(
    put,
    path = "/api/explorer/sessions/{id}/query",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = UpdateQueryDto,
    responses(
        (status = 200, description = "Query applied", body = ApiResponse<ExplorerStateDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn update_query(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateQueryDto>,
) -> StateResponse {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    ok(service.set_query(id, dto.query).await?)
}

/// Toggle marker clustering
#[utoipa::path(
    put,
    path = "/api/explorer/sessions/{id}/clustering",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = UpdateClusteringDto,
    responses(
        (status = 200, description = "Clustering updated", body = ApiResponse<ExplorerStateDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn update_clustering(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateClusteringDto>,
) -> StateResponse {
    ok(service.set_clustering(id, dto.enabled).await?)
}

/// Set or clear the selected place
#[utoipa::path(
    put,
    path = "/api/explorer/sessions/{id}/selection",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = UpdateSelectionDto,
    responses(
        (status = 200, description = "Selection applied", body = ApiResponse<ExplorerStateDto>),
        (status = 404, description = "Session or place not found")
    ),
    tag = "explorer"
)]
pub async fn update_selection(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSelectionDto>,
) -> StateResponse {
    ok(service.select_place(id, dto.place_id).await?)
}

/// Report a marker click
#[utoipa::path(
    post,
    path = "/api/explorer/sessions/{id}/markers/{place_id}/click",
    params(
        ("id" = Uuid, Path, description = "Session id"),
        ("place_id" = i64, Path, description = "Clicked place id")
    ),
    responses(
        (status = 200, description = "Place selected", body = ApiResponse<ExplorerStateDto>),
        (status = 400, description = "Place has no marker on the map"),
        (status = 404, description = "Session or place not found")
    ),
    tag = "explorer"
)]
pub async fn click_marker(
    State(service): State<Arc<ExplorerService>>,
    Path((id, place_id)): Path<(Uuid, i64)>,
) -> StateResponse {
    ok(service.click_marker(id, place_id).await?)
}

/// Report a completed pan or zoom
#[utoipa::path(
    post,
    path = "/api/explorer/sessions/{id}/viewport",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = ViewportChangeDto,
    responses(
        (status = 200, description = "Viewport applied", body = ApiResponse<ExplorerStateDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session not found")
    ),
    tag = "explorer"
)]
pub async fn change_viewport(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ViewportChangeDto>,
) -> StateResponse {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    ok(service.change_viewport(id, dto).await?)
}

/// Refetch places from the upstream and re-run the pipeline
#[utoipa::path(
    post,
    path = "/api/explorer/sessions/{id}/reload",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Places reloaded", body = ApiResponse<ExplorerStateDto>),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Upstream places API unavailable")
    ),
    tag = "explorer"
)]
pub async fn reload_places(
    State(service): State<Arc<ExplorerService>>,
    Path(id): Path<Uuid>,
) -> StateResponse {
    ok(service.reload_places(id).await?)
}
