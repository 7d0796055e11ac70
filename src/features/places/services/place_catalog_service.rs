use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::explorer::pipeline::matches_query;
use crate::features::places::dtos::{ListPlacesQuery, PlaceResponseDto};
use crate::features::places::models::Place;
use crate::features::places::services::PlaceSource;
use crate::shared::types::PaginationQuery;

/// Fetched place list with its fetch time
struct CatalogCache {
    places: Arc<Vec<Place>>,
    fetched_at: Instant,
}

/// Read-through cache over a [`PlaceSource`]
pub struct PlaceCatalogService {
    source: Arc<dyn PlaceSource>,
    ttl: Duration,
    cache: RwLock<Option<CatalogCache>>,
}

impl PlaceCatalogService {
    pub fn new(source: Arc<dyn PlaceSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Current place list, fetching when the cache is empty or stale
    pub async fn places(&self) -> Result<Arc<Vec<Place>>> {
        {
            let cache = self.cache.read().await;
            if let Some(places) = self.fresh(&cache) {
                tracing::debug!("Using cached place list ({} places)", places.len());
                return Ok(places);
            }
        }

        let mut cache = self.cache.write().await;
        // Another caller may have refetched while we waited for the lock
        if let Some(places) = self.fresh(&cache) {
            return Ok(places);
        }
        self.fetch_into(&mut cache).await
    }

    /// Fetch from the source regardless of cache state
    pub async fn refresh(&self) -> Result<Arc<Vec<Place>>> {
        let mut cache = self.cache.write().await;
        self.fetch_into(&mut cache).await
    }

    fn fresh(&self, cache: &Option<CatalogCache>) -> Option<Arc<Vec<Place>>> {
        cache
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| Arc::clone(&cached.places))
    }

    async fn fetch_into(&self, cache: &mut Option<CatalogCache>) -> Result<Arc<Vec<Place>>> {
        tracing::debug!("Fetching places from {}", self.source.describe());

        let places = self.source.fetch_places().await.map_err(|e| {
            tracing::error!("Failed to fetch places: {}", e);
            e
        })?;
        warn_on_convention_violations(&places);

        let places = Arc::new(places);
        *cache = Some(CatalogCache {
            places: Arc::clone(&places),
            fetched_at: Instant::now(),
        });

        tracing::info!(
            "Place catalog refreshed: {} places ({} mappable)",
            places.len(),
            places.iter().filter(|p| p.has_coordinates()).count()
        );
        Ok(places)
    }

    /// Drop the cached list so the next read refetches
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }

    /// Non-map listing, filtered by `q` and paginated
    pub async fn list(
        &self,
        query: &ListPlacesQuery,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<PlaceResponseDto>, i64)> {
        let places = self.places().await?;
        let text = query.q.as_deref().unwrap_or_default();

        let matching: Vec<&Place> = places.iter().filter(|p| matches_query(p, text)).collect();
        let total = matching.len() as i64;

        let items = matching
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit() as usize)
            .cloned()
            .map(PlaceResponseDto::from)
            .collect();

        Ok((items, total))
    }

    pub async fn get(&self, id: i64) -> Result<PlaceResponseDto> {
        let places = self.places().await?;
        places
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(PlaceResponseDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Place {} not found", id)))
    }
}

/// Upstream data is kept as-is; broken conventions are only reported
fn warn_on_convention_violations(places: &[Place]) {
    for place in places {
        if let Err(e) = place.validate() {
            tracing::warn!("Place {} ({}) breaks conventions: {}", place.id, place.name, e);
        }
    }
}
