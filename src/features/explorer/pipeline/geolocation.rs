use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::features::explorer::pipeline::geo::Coordinate;

/// Why the device could not report a position. Mirrors the browser
/// `GeolocationPositionError` codes plus "unsupported" for missing APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("user denied the geolocation request")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("geolocation request timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

impl GeolocationError {
    /// Map a browser `GeolocationPositionError.code`
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::PositionUnavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unsupported,
        }
    }
}

/// One-shot geolocation request: starts pending, resolves exactly once
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GeolocationState {
    #[default]
    Pending,
    Located(Coordinate),
    Failed(GeolocationError),
}

/// What happened to a delivered geolocation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Applied,
    /// The request had already completed; the result was ignored
    AlreadyResolved,
    /// The owner was torn down before the result arrived
    Discarded,
}

impl GeolocationState {
    pub fn user_position(&self) -> Option<Coordinate> {
        match self {
            GeolocationState::Located(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GeolocationState::Pending)
    }

    /// Complete the request. Success and error are both terminal.
    pub fn resolve(&mut self, result: Result<Coordinate, GeolocationError>) -> Delivery {
        if !self.is_pending() {
            tracing::debug!("Ignoring geolocation result, request already resolved");
            return Delivery::AlreadyResolved;
        }

        *self = match result {
            Ok(position) if position.is_valid() => GeolocationState::Located(position),
            Ok(position) => {
                tracing::warn!(
                    "Geolocation reported an invalid position ({}, {}), treating as unavailable",
                    position.lat,
                    position.lng
                );
                GeolocationState::Failed(GeolocationError::PositionUnavailable)
            }
            Err(e) => {
                tracing::warn!("Geolocation failed: {}. Falling back to the full place list", e);
                GeolocationState::Failed(e)
            }
        };

        Delivery::Applied
    }
}
