use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::config::PlacesApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::places::models::Place;

/// Upstream responses come either as a bare array or wrapped in `data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlacesPayload {
    Bare(Vec<Value>),
    Wrapped { data: Vec<Value> },
}

impl PlacesPayload {
    fn into_rows(self) -> Vec<Value> {
        match self {
            PlacesPayload::Bare(rows) => rows,
            PlacesPayload::Wrapped { data } => data,
        }
    }
}

/// Parse a place list in either upstream shape. Rows that do not form a
/// place are logged and skipped; only a malformed envelope is an error.
pub fn parse_places(body: &str) -> serde_json::Result<Vec<Place>> {
    let rows = serde_json::from_str::<PlacesPayload>(body)?.into_rows();
    let total = rows.len();

    let places: Vec<Place> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Place>(row) {
            Ok(place) => Some(place),
            Err(e) => {
                warn!("Skipping malformed place at index {}: {}", index, e);
                None
            }
        })
        .collect();

    if places.len() < total {
        warn!("Skipped {} of {} places", total - places.len(), total);
    }
    Ok(places)
}

/// HTTP client for `GET {base_url}/api/places`
pub struct PlacesApiClient {
    client: reqwest::Client,
    places_url: String,
}

impl PlacesApiClient {
    pub fn new(config: &PlacesApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            places_url: format!("{}/api/places", config.base_url),
        }
    }

    pub fn places_url(&self) -> &str {
        &self.places_url
    }

    /// Fetch the full place list
    pub async fn fetch_places(&self) -> Result<Vec<Place>> {
        debug!("Fetching places from {}", self.places_url);

        let response = self
            .client
            .get(&self.places_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Places API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Places API returned HTTP {} - {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to read places response: {}", e))
        })?;
        let places = parse_places(&body).map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse places response: {}", e))
        })?;

        info!("Fetched {} places from upstream", places.len());
        Ok(places)
    }
}
