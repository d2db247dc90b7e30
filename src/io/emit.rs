//! Emit normalized records as a single line of JSON.

use std::io::Write;

use crate::domain::NormalizedRecord;
use crate::error::AppError;

/// Serialize `records` as one compact JSON array followed by a newline.
pub fn write_records_json<W: Write>(
    out: &mut W,
    records: &[NormalizedRecord],
) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, records)
        .map_err(|e| AppError::Output(format!("failed to serialize records: {e}")))?;
    writeln!(out).map_err(|e| AppError::Output(e.to_string()))?;
    out.flush().map_err(|e| AppError::Output(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn record() -> NormalizedRecord {
        NormalizedRecord {
            name: "433 Eros".to_string(),
            id: "2000433".to_string(),
            potentially_hazardous: false,
            close_approach_date_time: "2025-01-01 00:00".to_string(),
            miss_distance_km: 1000000.12346,
            absolute_magnitude_h: 10.4,
            diameter_m: 23.0,
            velocity_kmph: 50000.65432,
            url: "http://example.test/433".to_string(),
        }
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        let mut buf = Vec::new();
        write_records_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn writes_one_line_with_fields_in_output_order() {
        let mut buf = Vec::new();
        write_records_json(&mut buf, &[record(), record()]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));

        let first = text.find("\"Name\"").unwrap();
        let keys = [
            "\"ID\"",
            "\"PotentiallyHazardous\"",
            "\"CloseApproachDateTime\"",
            "\"MissDistanceInKM\"",
            "\"AbsoluteMagnitudeH\"",
            "\"DiameterInMeters\"",
            "\"VelocityInKMpH\"",
            "\"URL\"",
        ];
        let mut last = first;
        for key in keys {
            let pos = text.find(key).unwrap();
            assert!(pos > last, "{key} out of order");
            last = pos;
        }
    }

    #[test]
    fn output_parses_back_to_expected_values() {
        let mut buf = Vec::new();
        write_records_json(&mut buf, &[record()]).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "Name": "433 Eros",
                "ID": "2000433",
                "PotentiallyHazardous": false,
                "CloseApproachDateTime": "2025-01-01 00:00",
                "MissDistanceInKM": 1000000.12346,
                "AbsoluteMagnitudeH": 10.4,
                "DiameterInMeters": 23.0,
                "VelocityInKMpH": 50000.65432,
                "URL": "http://example.test/433"
            }])
        );
    }
}
