//! Record mapping: raw feed objects to flat output records.
//!
//! Pure functions only. Rounding is half away from zero (`f64::round`) at
//! [`OUTPUT_DECIMALS`] places for every derived number.

use tracing::{debug, error};

use crate::domain::{DiameterRange, NormalizedRecord, RawNeoObject};
use crate::error::AppError;

pub const OUTPUT_DECIMALS: i32 = 5;

/// Round `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Mean of the min/max diameter estimate, rounded.
pub fn average_diameter(range: &DiameterRange) -> f64 {
    let avg = (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0;
    round_to(avg, OUTPUT_DECIMALS)
}

/// Flatten one object, using its first close-approach event.
pub fn normalize(neo: &RawNeoObject) -> Result<NormalizedRecord, AppError> {
    let malformed = |reason: String| AppError::MalformedRecord {
        id: neo.id.clone(),
        name: neo.name.clone(),
        reason,
    };

    let cad = neo
        .close_approach_data
        .first()
        .ok_or_else(|| malformed("no close-approach events".to_string()))?;

    let miss_km = cad
        .miss_distance
        .kilometers
        .to_f64()
        .map_err(|e| malformed(format!("miss_distance.kilometers: {e}")))?;
    let velocity_kmph = cad
        .relative_velocity
        .kilometers_per_hour
        .to_f64()
        .map_err(|e| malformed(format!("relative_velocity.kilometers_per_hour: {e}")))?;

    Ok(NormalizedRecord {
        name: neo.name.clone(),
        id: neo.id.clone(),
        potentially_hazardous: neo.is_potentially_hazardous_asteroid,
        close_approach_date_time: cad.close_approach_date_full.clone(),
        miss_distance_km: round_to(miss_km, OUTPUT_DECIMALS),
        absolute_magnitude_h: neo.absolute_magnitude_h,
        diameter_m: average_diameter(&neo.estimated_diameter.meters),
        velocity_kmph: round_to(velocity_kmph, OUTPUT_DECIMALS),
        url: neo.nasa_jpl_url.clone(),
    })
}

/// Map every object in order. The first malformed object aborts the run.
pub fn normalize_all(objects: &[RawNeoObject]) -> Result<Vec<NormalizedRecord>, AppError> {
    let records = objects
        .iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| error!(error = %e, "aborting: malformed feed record"))?;
    debug!(records = records.len(), "records normalized");
    Ok(records)
}
