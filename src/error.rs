//! Error taxonomy for the feed pipeline.
//!
//! Every variant is terminal for the process; `main.rs` prints the message and
//! exits with [`AppError::exit_code`].

use thiserror::Error;

/// Prefix of the diagnostic printed when the feed cannot be reached or read.
pub const FETCH_DIAGNOSTIC_PREFIX: &str = "Terminating.  Problem Accessing";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Missing or invalid credential / settings. Raised before any network access.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure, non-success status, or an undecodable body.
    #[error("{} {endpoint} for asteroid information:\n{detail}", FETCH_DIAGNOSTIC_PREFIX)]
    Fetch {
        endpoint: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("Feed response from {endpoint} has no near_earth_objects entry for {date}.")]
    MissingDateKey { endpoint: String, date: String },

    /// A feed object could not be normalized; the whole run is aborted.
    #[error("Malformed record id={id} name={name:?}: {reason}")]
    MalformedRecord {
        id: String,
        name: String,
        reason: String,
    },

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn fetch(
        endpoint: impl Into<String>,
        status: Option<u16>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            status,
            detail: detail.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Fetch { .. } | Self::MissingDateKey { .. } => 4,
            Self::MalformedRecord { .. } => 5,
            Self::Output(_) => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_non_zero_and_distinct_per_stage() {
        let config = AppError::config("missing key");
        let fetch = AppError::fetch("http://x", Some(500), "boom");
        let missing = AppError::MissingDateKey {
            endpoint: "http://x".into(),
            date: "2025-01-01".into(),
        };
        let malformed = AppError::MalformedRecord {
            id: "1".into(),
            name: "a".into(),
            reason: "no close approach".into(),
        };
        let output = AppError::Output("closed pipe".into());

        assert_eq!(config.exit_code(), 2);
        assert_eq!(fetch.exit_code(), 4);
        assert_eq!(missing.exit_code(), 4);
        assert_eq!(malformed.exit_code(), 5);
        assert_eq!(output.exit_code(), 6);
    }

    #[test]
    fn fetch_message_names_the_endpoint_and_cause() {
        let err = AppError::fetch(
            "https://api.nasa.gov/neo/rest/v1/feed",
            Some(403),
            "HTTP status 403 Forbidden",
        );
        let msg = err.to_string();
        assert!(msg.starts_with(FETCH_DIAGNOSTIC_PREFIX));
        assert!(msg.contains("https://api.nasa.gov/neo/rest/v1/feed"));
        assert!(msg.contains("403 Forbidden"));
    }
}
