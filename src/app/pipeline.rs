//! The feed pipeline, independent of process concerns.
//!
//! config -> fetch -> map -> emit
//!
//! Nothing is written to `out` unless every record was fetched and mapped.

use std::io::Write;

use crate::config::RequestConfig;
use crate::data::NeoWsClient;
use crate::domain::NormalizedRecord;
use crate::error::AppError;

/// Fetch and normalize the configured day.
pub fn collect_records(config: &RequestConfig) -> Result<Vec<NormalizedRecord>, AppError> {
    let client = NeoWsClient::new(config)?;
    let objects = client.fetch_day(config)?;
    crate::mapper::normalize_all(&objects)
}

/// Run the whole pipeline, writing the JSON line to `out`.
///
/// Returns the number of records emitted.
pub fn run_feed<W: Write>(config: &RequestConfig, out: &mut W) -> Result<usize, AppError> {
    let records = collect_records(config)?;
    crate::io::write_records_json(out, &records)?;
    Ok(records.len())
}
