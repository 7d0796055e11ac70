use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::explorer::pipeline::Coordinate;
use crate::shared::validation::PIN_CODE_REGEX;

/// A custom key/value detail shown on the place page (e.g. "Best season" / "Oct-Mar")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetail {
    pub key: String,
    pub value: String,
}

/// A travel destination as served by the upstream places API
///
/// Coordinates are optional: upstream rows may carry `null`, empty strings or
/// garbage, all of which deserialize to `None`. Such places stay listable but
/// never reach the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Place {
    pub id: i64,

    #[validate(length(min = 1, message = "Place name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,

    #[validate(regex(path = *PIN_CODE_REGEX, message = "PIN code must be six digits"))]
    #[serde(default)]
    pub pin_code: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,

    /// Primary image reference
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64_or_zero")]
    pub rating_sum: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_count: i64,

    #[validate(length(max = 10, message = "A place carries at most 10 tags"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Enumerated theme/category ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub themes: Vec<i32>,

    #[validate(length(max = 10, message = "A place carries at most 10 custom details"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<PlaceDetail>,

    #[serde(default)]
    pub visitors: Option<i64>,

    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub previous_update: Option<DateTime<Utc>>,
}

impl Place {
    /// Valid map coordinate, if both components are finite and in range
    pub fn coordinates(&self) -> Option<Coordinate> {
        let coordinate = Coordinate::new(self.latitude?, self.longitude?);
        coordinate.is_valid().then_some(coordinate)
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Mean rating, derived on demand and never stored
    pub fn average_rating(&self) -> Option<f64> {
        (self.rating_count > 0).then(|| self.rating_sum / self.rating_count as f64)
    }
}

/// Accepts numbers and numeric strings; anything else becomes `None`
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

fn lenient_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
