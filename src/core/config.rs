use std::env;
use std::time::Duration;

use crate::features::explorer::pipeline::{
    ClusterSettings, Coordinate, ProximitySettings, RadiusPolicy, ViewportLimits,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub places_api: PlacesApiConfig,
    pub explorer: ExplorerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Where the raw place list comes from
#[derive(Debug, Clone)]
pub struct PlacesApiConfig {
    /// Base URL of the upstream places API (e.g. "http://localhost:5000")
    pub base_url: String,
    /// Optional JSON seed file; takes precedence over the HTTP API when set
    pub seed_file: Option<String>,
    /// How long a fetched place list is reused before refetching
    pub cache_ttl: Duration,
}

/// Tuning for the map explorer pipeline and its session registry
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub radius_km: f64,
    pub radius_policy: RadiusPolicy,
    pub cluster_radius_px: f64,
    pub disable_clustering_at_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub selection_min_zoom: f64,
    pub default_center: Coordinate,
    pub default_zoom: f64,
    pub attribution: String,
    pub max_sessions: usize,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            places_api: PlacesApiConfig::from_env()?,
            explorer: ExplorerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "EasyTrip API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Map explorer and place discovery API for EasyTrip".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl PlacesApiConfig {
    const DEFAULT_CACHE_TTL_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("PLACES_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let seed_file = env::var("PLACES_SEED_FILE").ok().filter(|s| !s.is_empty());

        let cache_ttl_secs = env::var("PLACES_CACHE_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_CACHE_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "PLACES_CACHE_TTL_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            seed_file,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

impl ExplorerConfig {
    const DEFAULT_RADIUS_KM: f64 = 300.0;
    const DEFAULT_CLUSTER_RADIUS_PX: f64 = 80.0;
    const DEFAULT_DISABLE_CLUSTERING_AT_ZOOM: f64 = 15.0;
    const DEFAULT_MIN_ZOOM: f64 = 3.0;
    const DEFAULT_MAX_ZOOM: f64 = 18.0;
    const DEFAULT_SELECTION_MIN_ZOOM: f64 = 12.0;
    // Geographic center of India
    const DEFAULT_CENTER_LAT: f64 = 20.5937;
    const DEFAULT_CENTER_LNG: f64 = 78.9629;
    const DEFAULT_ZOOM: f64 = 5.0;
    const DEFAULT_ATTRIBUTION: &'static str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
    const DEFAULT_MAX_SESSIONS: usize = 10_000;
    const DEFAULT_SESSION_TTL_SECS: u64 = 1800; // 30 minutes
    const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let radius_km = parse_f64("PROXIMITY_RADIUS_KM", Self::DEFAULT_RADIUS_KM)?;
        if radius_km <= 0.0 {
            return Err("PROXIMITY_RADIUS_KM must be greater than zero".to_string());
        }

        let radius_policy = env::var("RADIUS_POLICY")
            .unwrap_or_else(|_| "best_effort".to_string())
            .parse::<RadiusPolicy>()?;

        let cluster_radius_px =
            parse_f64("CLUSTER_RADIUS_PX", Self::DEFAULT_CLUSTER_RADIUS_PX)?;
        let disable_clustering_at_zoom = parse_f64(
            "DISABLE_CLUSTERING_AT_ZOOM",
            Self::DEFAULT_DISABLE_CLUSTERING_AT_ZOOM,
        )?;
        let min_zoom = parse_f64("MAP_MIN_ZOOM", Self::DEFAULT_MIN_ZOOM)?;
        let max_zoom = parse_f64("MAP_MAX_ZOOM", Self::DEFAULT_MAX_ZOOM)?;
        if min_zoom > max_zoom {
            return Err("MAP_MIN_ZOOM must not exceed MAP_MAX_ZOOM".to_string());
        }
        let selection_min_zoom =
            parse_f64("SELECTION_MIN_ZOOM", Self::DEFAULT_SELECTION_MIN_ZOOM)?;

        let default_center = Coordinate::new(
            parse_f64("MAP_DEFAULT_LAT", Self::DEFAULT_CENTER_LAT)?,
            parse_f64("MAP_DEFAULT_LNG", Self::DEFAULT_CENTER_LNG)?,
        );
        if !default_center.is_valid() {
            return Err("MAP_DEFAULT_LAT/MAP_DEFAULT_LNG must be a valid coordinate".to_string());
        }
        let default_zoom = parse_f64("MAP_DEFAULT_ZOOM", Self::DEFAULT_ZOOM)?;

        let attribution =
            env::var("MAP_ATTRIBUTION").unwrap_or_else(|_| Self::DEFAULT_ATTRIBUTION.to_string());

        let max_sessions = env::var("EXPLORER_MAX_SESSIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_SESSIONS.to_string())
            .parse::<usize>()
            .map_err(|_| "EXPLORER_MAX_SESSIONS must be a valid number".to_string())?;

        let session_ttl_secs = env::var("EXPLORER_SESSION_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_SESSION_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "EXPLORER_SESSION_TTL_SECS must be a valid number".to_string())?;

        let sweep_interval_secs = env::var("EXPLORER_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_SWEEP_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "EXPLORER_SWEEP_INTERVAL_SECS must be a valid number".to_string())?;

        Ok(Self {
            radius_km,
            radius_policy,
            cluster_radius_px,
            disable_clustering_at_zoom,
            min_zoom,
            max_zoom,
            selection_min_zoom,
            default_center,
            default_zoom,
            attribution,
            max_sessions,
            session_ttl: Duration::from_secs(session_ttl_secs),
            sweep_interval: Duration::from_secs(sweep_interval_secs.max(1)),
        })
    }

    pub fn proximity(&self) -> ProximitySettings {
        ProximitySettings {
            radius_km: self.radius_km,
            policy: self.radius_policy,
        }
    }

    pub fn clustering(&self) -> ClusterSettings {
        ClusterSettings {
            radius_px: self.cluster_radius_px,
            disable_at_zoom: self.disable_clustering_at_zoom,
        }
    }

    pub fn viewport_limits(&self) -> ViewportLimits {
        ViewportLimits {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            radius_km: Self::DEFAULT_RADIUS_KM,
            radius_policy: RadiusPolicy::BestEffort,
            cluster_radius_px: Self::DEFAULT_CLUSTER_RADIUS_PX,
            disable_clustering_at_zoom: Self::DEFAULT_DISABLE_CLUSTERING_AT_ZOOM,
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            selection_min_zoom: Self::DEFAULT_SELECTION_MIN_ZOOM,
            default_center: Coordinate::new(Self::DEFAULT_CENTER_LAT, Self::DEFAULT_CENTER_LNG),
            default_zoom: Self::DEFAULT_ZOOM,
            attribution: Self::DEFAULT_ATTRIBUTION.to_string(),
            max_sessions: Self::DEFAULT_MAX_SESSIONS,
            session_ttl: Duration::from_secs(Self::DEFAULT_SESSION_TTL_SECS),
            sweep_interval: Duration::from_secs(Self::DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

fn parse_f64(key: &str, default: f64) -> Result<f64, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
