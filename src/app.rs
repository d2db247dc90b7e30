//! Process-level wiring for the `neo` binary.
//!
//! Loads `.env`, installs logging and reads the environment before anything
//! touches the network, then hands stdout to [`pipeline::run_feed`].

use crate::config::RequestConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `neo` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init();

    let config = RequestConfig::from_env()?;
    tracing::debug!(?config, "configuration ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let emitted = pipeline::run_feed(&config, &mut out)?;
    tracing::info!(records = emitted, date = config.date(), "done");
    Ok(())
}
