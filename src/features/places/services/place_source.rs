use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::places::models::Place;
use crate::modules::places_api::{parse_places, PlacesApiClient};

/// Where the raw place list comes from
#[async_trait]
pub trait PlaceSource: Send + Sync {
    async fn fetch_places(&self) -> Result<Vec<Place>>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl PlaceSource for PlacesApiClient {
    async fn fetch_places(&self) -> Result<Vec<Place>> {
        PlacesApiClient::fetch_places(self).await
    }

    fn describe(&self) -> String {
        format!("places API at {}", self.places_url())
    }
}

/// Reads places from a JSON seed file on every fetch
pub struct FilePlaceSource {
    path: PathBuf,
}

impl FilePlaceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlaceSource for FilePlaceSource {
    async fn fetch_places(&self) -> Result<Vec<Place>> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Failed to read seed file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        parse_places(&body).map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Seed file {} is not a valid place list: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn describe(&self) -> String {
        format!("seed file {}", self.path.display())
    }
}

/// Fixed in-memory list
pub struct StaticPlaceSource {
    places: Vec<Place>,
}

impl StaticPlaceSource {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }
}

#[async_trait]
impl PlaceSource for StaticPlaceSource {
    async fn fetch_places(&self) -> Result<Vec<Place>> {
        Ok(self.places.clone())
    }

    fn describe(&self) -> String {
        format!("static list of {} places", self.places.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "name": "Baga Beach", "latitude": 15.5553, "longitude": 73.7517}},
                {{"id": 2, "name": "Unmapped Lake", "latitude": null, "longitude": ""}}
            ]"#
        )
        .unwrap();

        let source = FilePlaceSource::new(file.path());
        let places = source.fetch_places().await.unwrap();

        assert_eq!(places.len(), 2);
        assert!(places[0].has_coordinates());
        assert!(!places[1].has_coordinates());
        assert!(source.describe().starts_with("seed file"));
    }

    #[tokio::test]
    async fn test_file_source_keeps_good_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data": [{{"id": 1, "name": "Baga Beach"}}, {{"id": 2}}, {{"id": 3, "name": "Hampi"}}]}}"#
        )
        .unwrap();

        let places = FilePlaceSource::new(file.path()).fetch_places().await.unwrap();

        let ids: Vec<i64> = places.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_external_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePlaceSource::new(dir.path().join("missing.json"));

        let result = source.fetch_places().await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_malformed_seed_file_is_external_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = FilePlaceSource::new(file.path()).fetch_places().await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
