use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::explorer::handlers;
use crate::features::explorer::services::ExplorerService;

/// Create routes for the explorer feature
pub fn routes(service: Arc<ExplorerService>) -> Router {
    Router::new()
        .route("/api/explorer/sessions", post(handlers::create_session))
        .route(
            "/api/explorer/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route(
            "/api/explorer/sessions/{id}/geolocation",
            post(handlers::resolve_geolocation),
        )
        .route(
            "/api/explorer/sessions/{id}/query",
            put(handlers::update_query),
        )
        .route(
            "/api/explorer/sessions/{id}/clustering",
            put(handlers::update_clustering),
        )
        .route(
            "/api/explorer/sessions/{id}/selection",
            put(handlers::update_selection),
        )
        .route(
            "/api/explorer/sessions/{id}/markers/{place_id}/click",
            post(handlers::click_marker),
        )
        .route(
            "/api/explorer/sessions/{id}/viewport",
            post(handlers::change_viewport),
        )
        .route(
            "/api/explorer/sessions/{id}/reload",
            post(handlers::reload_places),
        )
        .with_state(service)
}
