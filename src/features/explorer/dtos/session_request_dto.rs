use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::core::error::AppError;
use crate::features::explorer::pipeline::{Coordinate, GeolocationError, ViewportSize};

// =============================================================================
// SESSION LIFECYCLE
// =============================================================================

/// Props for mounting a new explorer session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSessionDto {
    /// Initial map center; defaults to the configured center
    pub center: Option<Coordinate>,
    /// Initial zoom; defaults to the configured zoom
    pub zoom: Option<f64>,
    /// Map viewport in CSS pixels
    pub size: ViewportSize,
    /// Group nearby markers (default: true)
    #[serde(default = "default_clustering")]
    pub clustering: bool,
    #[validate(length(max = 200, message = "Query must not exceed 200 characters"))]
    #[serde(default)]
    pub query: String,
    /// Geolocation result if the client already has one
    #[validate(nested)]
    pub geolocation: Option<GeolocationResultDto>,
}

fn default_clustering() -> bool {
    true
}

// =============================================================================
// SESSION INPUTS
// =============================================================================

/// One-shot browser geolocation result: a position or an error code
/// (1 = permission denied, 2 = position unavailable, 3 = timeout, other = unsupported)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_geolocation_result"))]
pub struct GeolocationResultDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error_code: Option<u16>,
}

fn validate_geolocation_result(dto: &GeolocationResultDto) -> Result<(), ValidationError> {
    match (dto.latitude, dto.longitude, dto.error_code) {
        (_, _, Some(_)) => Ok(()),
        (Some(_), Some(_), None) => Ok(()),
        _ => {
            let mut error = ValidationError::new("geolocation_result");
            error.message = Some("Provide latitude and longitude, or an error_code".into());
            Err(error)
        }
    }
}

impl GeolocationResultDto {
    /// An error code wins over coordinates
    pub fn into_result(self) -> Result<Result<Coordinate, GeolocationError>, AppError> {
        if let Some(code) = self.error_code {
            return Ok(Err(GeolocationError::from_code(code)));
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Ok(Ok(Coordinate::new(lat, lng))),
            _ => Err(AppError::Validation(
                "Provide latitude and longitude, or an error_code".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQueryDto {
    #[validate(length(max = 200, message = "Query must not exceed 200 characters"))]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateClusteringDto {
    pub enabled: bool,
}

/// Selected place, or null to clear the selection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSelectionDto {
    pub place_id: Option<i64>,
}

/// Reported by the client when a pan or zoom completes
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ViewportChangeDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    /// Unwrapped longitudes beyond ±180 are accepted and wrapped
    #[validate(range(min = -540.0, max = 540.0, message = "Longitude out of range"))]
    pub longitude: f64,
    #[validate(range(min = 0.0, max = 24.0, message = "Zoom must be between 0 and 24"))]
    pub zoom: f64,
    #[validate(range(min = -360.0, max = 360.0, message = "Bearing must be between -360 and 360"))]
    pub bearing: Option<f64>,
    /// New viewport size if the map was resized
    pub size: Option<ViewportSize>,
}

impl ViewportChangeDto {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geolocation_error_code_wins() {
        let dto = GeolocationResultDto {
            latitude: Some(15.5),
            longitude: Some(73.8),
            error_code: Some(1),
        };
        assert_eq!(
            dto.into_result().unwrap(),
            Err(GeolocationError::PermissionDenied)
        );
    }

    #[test]
    fn test_geolocation_needs_both_coordinates() {
        let dto = GeolocationResultDto {
            latitude: Some(15.5),
            longitude: None,
            error_code: None,
        };
        assert!(dto.validate().is_err());
        assert!(matches!(dto.into_result(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_create_session_defaults() {
        let dto: CreateSessionDto = serde_json::from_value(json!({
            "size": { "width": 1024, "height": 768 }
        }))
        .unwrap();

        assert!(dto.clustering);
        assert!(dto.query.is_empty());
        assert!(dto.center.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_viewport_change_rejects_bad_latitude() {
        let dto = ViewportChangeDto {
            latitude: 91.0,
            longitude: 73.8,
            zoom: 10.0,
            bearing: None,
            size: None,
        };
        assert!(dto.validate().is_err());
    }
}
