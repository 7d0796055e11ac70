use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::core::config::ExplorerConfig;
use crate::core::error::{AppError, Result};
use crate::features::explorer::dtos::{
    CreateSessionDto, ExplorerStateDto, GeolocationResultDto, ViewportChangeDto,
};
use crate::features::explorer::pipeline::{
    Delivery, EventQueue, ExplorerSettings, MapExplorer, MapInitError, MountOptions,
    SelectionError,
};
use crate::features::places::services::PlaceCatalogService;

/// One mounted explorer and its idle clock
struct ExplorerSession {
    explorer: MapExplorer<EventQueue>,
    last_touched: Instant,
}

type SessionHandle = Arc<Mutex<ExplorerSession>>;

/// Registry of live explorer sessions.
///
/// Each session sits behind its own mutex, so inputs to one session are
/// applied strictly one at a time while different sessions run in parallel.
pub struct ExplorerService {
    catalog: Arc<PlaceCatalogService>,
    config: ExplorerConfig,
    settings: ExplorerSettings,
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl ExplorerService {
    pub fn new(catalog: Arc<PlaceCatalogService>, config: ExplorerConfig) -> Self {
        Self {
            settings: ExplorerSettings::from(&config),
            catalog,
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Mount a new explorer over the current place list
    pub async fn create_session(&self, dto: CreateSessionDto) -> Result<ExplorerStateDto> {
        self.ensure_capacity().await?;

        let places = self.catalog.places().await?;

        let options = MountOptions {
            places: places.as_ref().clone(),
            center: dto.center.unwrap_or(self.config.default_center),
            zoom: dto.zoom.unwrap_or(self.config.default_zoom),
            size: dto.size,
            clustering: dto.clustering,
            query: dto.query,
        };
        let mut explorer = MapExplorer::mount(self.settings, options, EventQueue::default())
            .map_err(map_unavailable)?;

        let delivery = match dto.geolocation {
            Some(result) => Some(explorer.resolve_geolocation(result.into_result()?)),
            None => None,
        };

        let id = Uuid::new_v4();
        let state = ExplorerStateDto::capture(id, &mut explorer, &self.config.attribution, delivery);

        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(too_many_sessions(self.config.max_sessions));
        }
        sessions.insert(
            id,
            Arc::new(Mutex::new(ExplorerSession {
                explorer,
                last_touched: Instant::now(),
            })),
        );

        tracing::info!(
            "Explorer session {} created ({} places on map, {} live sessions)",
            id,
            state.places.len(),
            sessions.len()
        );
        Ok(state)
    }

    pub async fn get_state(&self, id: Uuid) -> Result<ExplorerStateDto> {
        self.with_session(id, |_| Ok(None)).await
    }

    /// Unmount and forget a session
    pub async fn delete_session(&self, id: Uuid) -> Result<()> {
        let handle = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| session_not_found(id))?;

        handle.lock().await.explorer.unmount();
        tracing::info!("Explorer session {} closed", id);
        Ok(())
    }

    pub async fn resolve_geolocation(
        &self,
        id: Uuid,
        dto: GeolocationResultDto,
    ) -> Result<ExplorerStateDto> {
        let result = dto.into_result()?;
        self.with_session(id, |explorer| {
            Ok(Some(explorer.resolve_geolocation(result)))
        })
        .await
    }

    pub async fn set_query(&self, id: Uuid, query: String) -> Result<ExplorerStateDto> {
        self.with_session(id, |explorer| {
            explorer.set_query(query);
            Ok(None)
        })
        .await
    }

    pub async fn set_clustering(&self, id: Uuid, enabled: bool) -> Result<ExplorerStateDto> {
        self.with_session(id, |explorer| {
            explorer.set_clustering(enabled);
            Ok(None)
        })
        .await
    }

    pub async fn select_place(&self, id: Uuid, place_id: Option<i64>) -> Result<ExplorerStateDto> {
        self.with_session(id, |explorer| {
            explorer.select_place(place_id).map_err(selection_error)?;
            Ok(None)
        })
        .await
    }

    pub async fn click_marker(&self, id: Uuid, place_id: i64) -> Result<ExplorerStateDto> {
        self.with_session(id, |explorer| {
            explorer.click_marker(place_id).map_err(selection_error)?;
            Ok(None)
        })
        .await
    }

    pub async fn change_viewport(
        &self,
        id: Uuid,
        dto: ViewportChangeDto,
    ) -> Result<ExplorerStateDto> {
        self.with_session(id, |explorer| {
            if let Some(size) = dto.size {
                explorer
                    .resize(size)
                    .map_err(|e| AppError::Validation(e.to_string()))?;
            }
            explorer.move_end(dto.center(), dto.zoom, dto.bearing);
            Ok(None)
        })
        .await
    }

    /// Drop the cached catalog and feed the fresh list to the session
    pub async fn reload_places(&self, id: Uuid) -> Result<ExplorerStateDto> {
        // Fail fast on unknown sessions before hitting the upstream
        self.handle(id).await?;

        self.catalog.invalidate().await;
        let places = self.catalog.places().await?;

        self.with_session(id, |explorer| {
            explorer.set_places(places.as_ref().clone());
            Ok(None)
        })
        .await
    }

    /// Unmount and remove sessions idle for longer than the configured TTL
    pub async fn sweep_idle(&self) -> usize {
        let ttl = self.config.session_ttl;
        let handles: Vec<(Uuid, SessionHandle)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, handle)| (*id, Arc::clone(handle)))
            .collect();

        let mut expired = Vec::new();
        for (id, handle) in handles {
            // A session busy with a request is not idle
            let Ok(session) = handle.try_lock() else {
                continue;
            };
            if session.last_touched.elapsed() >= ttl {
                expired.push(id);
            }
        }
        if expired.is_empty() {
            return 0;
        }

        let mut removed = Vec::with_capacity(expired.len());
        {
            let mut sessions = self.sessions.write().await;
            for id in &expired {
                if let Some(handle) = sessions.remove(id) {
                    removed.push(handle);
                }
            }
        }
        for handle in &removed {
            handle.lock().await.explorer.unmount();
        }

        tracing::info!("Swept {} idle explorer sessions", removed.len());
        removed.len()
    }

    async fn ensure_capacity(&self) -> Result<()> {
        if self.session_count().await >= self.config.max_sessions {
            return Err(too_many_sessions(self.config.max_sessions));
        }
        Ok(())
    }

    async fn handle(&self, id: Uuid) -> Result<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| session_not_found(id))
    }

    /// Apply one input to a session under its lock and capture the new state
    async fn with_session<F>(&self, id: Uuid, apply: F) -> Result<ExplorerStateDto>
    where
        F: FnOnce(&mut MapExplorer<EventQueue>) -> Result<Option<Delivery>>,
    {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        // Closed while this request waited for the lock
        if !session.explorer.is_mounted() {
            return Err(session_not_found(id));
        }
        session.last_touched = Instant::now();

        let delivery = apply(&mut session.explorer)?;
        Ok(ExplorerStateDto::capture(
            id,
            &mut session.explorer,
            &self.config.attribution,
            delivery,
        ))
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Explorer session {} not found", id))
}

fn too_many_sessions(max: usize) -> AppError {
    AppError::RateLimitExceeded(format!(
        "Too many open explorer sessions (max {}), try again later",
        max
    ))
}

fn map_unavailable(e: MapInitError) -> AppError {
    AppError::MapUnavailable(e.to_string())
}

fn selection_error(e: SelectionError) -> AppError {
    match e {
        SelectionError::UnknownPlace(_) => AppError::NotFound(e.to_string()),
        SelectionError::NotOnMap(_) => AppError::BadRequest(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::explorer::dtos::GeolocationStatus;
    use crate::features::explorer::pipeline::{Coordinate, ExplorerEvent, MapCommand, ViewportSize};
    use crate::features::places::models::Place;
    use crate::features::places::services::StaticPlaceSource;
    use crate::shared::test_helpers::{place_at, sample_place};
    use std::time::Duration;

    fn places() -> Vec<Place> {
        vec![
            Place {
                name: "Baga Beach".to_string(),
                location: Some("Goa".to_string()),
                ..place_at(1, 15.5553, 73.7517)
            },
            Place {
                name: "Hampi".to_string(),
                state: Some("Karnataka".to_string()),
                ..place_at(2, 15.3350, 76.4600)
            },
            sample_place(3, "Unmapped Lake"),
        ]
    }

    fn service_with(config: ExplorerConfig) -> ExplorerService {
        let catalog = Arc::new(PlaceCatalogService::new(
            Arc::new(StaticPlaceSource::new(places())),
            Duration::from_secs(60),
        ));
        ExplorerService::new(catalog, config)
    }

    fn service() -> ExplorerService {
        service_with(ExplorerConfig::default())
    }

    fn create_dto() -> CreateSessionDto {
        CreateSessionDto {
            center: None,
            zoom: None,
            size: ViewportSize {
                width: 1024,
                height: 768,
            },
            clustering: true,
            query: String::new(),
            geolocation: None,
        }
    }

    #[tokio::test]
    async fn test_create_session_uses_configured_defaults() {
        let service = service();

        let state = service.create_session(create_dto()).await.unwrap();

        assert_eq!(state.view.center, Coordinate::new(20.5937, 78.9629));
        assert_eq!(state.view.zoom, 5.0);
        assert_eq!(state.places.len(), 2);
        assert_eq!(state.geolocation.status, GeolocationStatus::Pending);
        assert_eq!(state.attribution, ExplorerConfig::default().attribution);
        assert_eq!(service.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_surface_is_map_unavailable() {
        let service = service();
        let dto = CreateSessionDto {
            size: ViewportSize {
                width: 0,
                height: 0,
            },
            ..create_dto()
        };

        let result = service.create_session(dto).await;

        assert!(matches!(result, Err(AppError::MapUnavailable(_))));
        assert_eq!(service.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_session_cap_is_enforced() {
        let service = service_with(ExplorerConfig {
            max_sessions: 1,
            ..ExplorerConfig::default()
        });

        service.create_session(create_dto()).await.unwrap();
        let second = service.create_session(create_dto()).await;

        assert!(matches!(second, Err(AppError::RateLimitExceeded(_))));
    }

    #[tokio::test]
    async fn test_events_and_commands_are_drained_per_response() {
        let service = service();
        let id = service.create_session(create_dto()).await.unwrap().session_id;

        let selected = service.select_place(id, Some(2)).await.unwrap();
        let again = service.get_state(id).await.unwrap();

        assert_eq!(selected.commands.len(), 2);
        assert!(matches!(selected.commands[0], MapCommand::FlyTo { .. }));
        assert!(selected
            .events
            .contains(&ExplorerEvent::ZoomChanged { zoom: 12.0 }));
        assert!(again.commands.is_empty());
        assert!(again.events.is_empty());
        assert_eq!(again.open_popup_place_id, Some(2));
    }

    #[tokio::test]
    async fn test_geolocation_is_one_shot() {
        let service = service();
        let id = service.create_session(create_dto()).await.unwrap().session_id;
        let denied = GeolocationResultDto {
            latitude: None,
            longitude: None,
            error_code: Some(1),
        };
        let located = GeolocationResultDto {
            latitude: Some(15.5),
            longitude: Some(73.8),
            error_code: None,
        };

        let first = service.resolve_geolocation(id, denied).await.unwrap();
        let second = service.resolve_geolocation(id, located).await.unwrap();

        assert_eq!(first.delivery, Some(Delivery::Applied));
        assert!(!first.radius.mode);
        assert_eq!(second.delivery, Some(Delivery::AlreadyResolved));
        assert_eq!(second.geolocation.status, GeolocationStatus::Failed);
    }

    #[tokio::test]
    async fn test_deleted_session_is_gone() {
        let service = service();
        let id = service.create_session(create_dto()).await.unwrap().session_id;

        service.delete_session(id).await.unwrap();

        assert!(matches!(
            service.get_state(id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_session(id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_idle_sessions() {
        let service = service_with(ExplorerConfig {
            session_ttl: Duration::ZERO,
            ..ExplorerConfig::default()
        });
        service.create_session(create_dto()).await.unwrap();
        service.create_session(create_dto()).await.unwrap();

        assert_eq!(service.sweep_idle().await, 2);
        assert_eq!(service.session_count().await, 0);

        let fresh = service_with(ExplorerConfig::default());
        fresh.create_session(create_dto()).await.unwrap();
        assert_eq!(fresh.sweep_idle().await, 0);
        assert_eq!(fresh.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_selection_is_not_found() {
        let service = service();
        let id = service.create_session(create_dto()).await.unwrap().session_id;

        let result = service.select_place(id, Some(404)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
