use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::features::explorer::pipeline::derived::DerivedPlace;
use crate::features::explorer::pipeline::geo::haversine_km;
use crate::features::explorer::pipeline::geolocation::GeolocationState;
use crate::features::places::models::Place;

/// What to return when nothing lies inside the radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Fall back to every valid place, nearest first, keeping radius mode on
    #[default]
    BestEffort,
    /// Return nothing
    Strict,
}

impl fmt::Display for RadiusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadiusPolicy::BestEffort => write!(f, "best_effort"),
            RadiusPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for RadiusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(RadiusPolicy::BestEffort),
            "strict" => Ok(RadiusPolicy::Strict),
            other => Err(format!(
                "RADIUS_POLICY must be 'best_effort' or 'strict', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximitySettings {
    pub radius_km: f64,
    pub policy: RadiusPolicy,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            radius_km: 300.0,
            policy: RadiusPolicy::BestEffort,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProximityOutcome {
    pub places: Vec<DerivedPlace>,
    /// Off only once geolocation has failed
    pub radius_mode: bool,
    /// Nothing was inside the radius and the policy decided the result
    pub radius_fallback: bool,
    pub within_radius: usize,
}

/// Restrict places to those near the user.
///
/// Places without a valid coordinate are always dropped. Without a user
/// position the remaining places come back in input order with no distance.
pub fn filter_by_proximity(
    places: &[Place],
    geolocation: &GeolocationState,
    settings: &ProximitySettings,
) -> ProximityOutcome {
    let valid: Vec<DerivedPlace> = places.iter().filter_map(DerivedPlace::from_place).collect();

    let user = match geolocation {
        GeolocationState::Located(position) => *position,
        GeolocationState::Pending | GeolocationState::Failed(_) => {
            return ProximityOutcome {
                places: valid,
                radius_mode: !matches!(geolocation, GeolocationState::Failed(_)),
                radius_fallback: false,
                within_radius: 0,
            };
        }
    };

    let mut measured: Vec<DerivedPlace> = valid
        .into_iter()
        .map(|mut p| {
            p.distance_km = Some(haversine_km(user, p.coordinates));
            p
        })
        .collect();
    measured.sort_by(|a, b| distance_of(a).total_cmp(&distance_of(b)));

    let within_radius = measured
        .iter()
        .take_while(|p| distance_of(p) <= settings.radius_km)
        .count();

    if within_radius > 0 {
        measured.truncate(within_radius);
        return ProximityOutcome {
            places: measured,
            radius_mode: true,
            radius_fallback: false,
            within_radius,
        };
    }

    tracing::debug!(
        "No places within {}km of user, applying {} radius policy",
        settings.radius_km,
        settings.policy
    );

    let places = match settings.policy {
        RadiusPolicy::BestEffort => measured,
        RadiusPolicy::Strict => Vec::new(),
    };

    ProximityOutcome {
        places,
        radius_mode: true,
        radius_fallback: true,
        within_radius: 0,
    }
}

fn distance_of(place: &DerivedPlace) -> f64 {
    place.distance_km.unwrap_or(f64::INFINITY)
}
