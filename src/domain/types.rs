//! Shared domain types.
//!
//! Raw types mirror the NeoWs feed payload and are only ever deserialized.
//! `NormalizedRecord` is only ever serialized; its field order is the output
//! field order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level feed payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    /// Total objects across the requested window, as reported by the feed.
    #[serde(default)]
    pub element_count: Option<u64>,
    /// Objects keyed by `YYYY-MM-DD`, left undecoded until the day is picked.
    pub near_earth_objects: HashMap<String, Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawNeoObject {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    /// Ordered close passes; only the first is used.
    #[serde(default)]
    pub close_approach_data: Vec<RawCloseApproachEvent>,
}

/// Diameter estimates per unit. Only meters are consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCloseApproachEvent {
    /// e.g. `2025-Jan-01 00:00`
    pub close_approach_date_full: String,
    pub miss_distance: MissDistance,
    pub relative_velocity: RelativeVelocity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissDistance {
    pub kilometers: FeedNumber,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: FeedNumber,
}

/// A numeric value the feed encodes as text.
///
/// The feed sends strings (`"1000000.123456"`); bare JSON numbers are accepted
/// as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedNumber {
    Text(String),
    Number(f64),
}

impl FeedNumber {
    /// Parse to a finite `f64`, or describe why not.
    pub fn to_f64(&self) -> Result<f64, String> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("'{raw}' is not a number ({e})"))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("{value} is not finite"))
        }
    }
}

impl From<&str> for FeedNumber {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

/// One flattened output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "PotentiallyHazardous")]
    pub potentially_hazardous: bool,
    #[serde(rename = "CloseApproachDateTime")]
    pub close_approach_date_time: String,
    /// Rounded to 5 decimal places.
    #[serde(rename = "MissDistanceInKM")]
    pub miss_distance_km: f64,
    #[serde(rename = "AbsoluteMagnitudeH")]
    pub absolute_magnitude_h: f64,
    /// Mean of the min/max estimate, rounded to 5 decimal places.
    #[serde(rename = "DiameterInMeters")]
    pub diameter_m: f64,
    /// Rounded to 5 decimal places.
    #[serde(rename = "VelocityInKMpH")]
    pub velocity_kmph: f64,
    #[serde(rename = "URL")]
    pub url: String,
}
