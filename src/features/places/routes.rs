use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::places::handlers;
use crate::features::places::services::PlaceCatalogService;

/// Create routes for the places feature
pub fn routes(service: Arc<PlaceCatalogService>) -> Router {
    Router::new()
        .route("/api/places", get(handlers::list_places))
        .route("/api/places/{id}", get(handlers::get_place))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::places::services::StaticPlaceSource;
    use crate::shared::test_helpers::{place_at, sample_place};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::time::Duration;

    fn server() -> TestServer {
        let source = StaticPlaceSource::new(vec![
            place_at(1, 15.5553, 73.7517),
            sample_place(2, "Unmapped Lake"),
        ]);
        let service = Arc::new(PlaceCatalogService::new(
            Arc::new(source),
            Duration::from_secs(60),
        ));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_places_includes_unmapped() {
        let response = server().get("/api/places").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][1]["has_coordinates"], false);
        assert_eq!(body["data"][1]["latitude"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_places_text_filter() {
        let response = server().get("/api/places").add_query_param("q", "LAKE").await;

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["id"], 2);
    }

    #[tokio::test]
    async fn test_list_places_paginates_with_filter() {
        let response = server()
            .get("/api/places")
            .add_query_param("q", "a")
            .add_query_param("page", 2)
            .add_query_param("page_size", 1)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"][0]["id"], 2);
    }

    #[tokio::test]
    async fn test_list_places_huge_page_is_empty() {
        let response = server()
            .get("/api/places")
            .add_query_param("page", i64::MAX)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_get_missing_place_is_404() {
        let response = server().get("/api/places/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
