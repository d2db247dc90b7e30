//! Request configuration for a single feed run.
//!
//! The configuration is built once, before any network access, and then passed
//! by reference to the fetcher. Nothing here is global.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use reqwest::Url;

use crate::error::AppError;

pub const FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

pub const API_KEY_VAR: &str = "NASA_API_KEY";
pub const FEED_URL_VAR: &str = "NEO_FEED_URL";
pub const TIMEOUT_VAR: &str = "NEO_TIMEOUT_SECS";

const JSON_MEDIA_TYPE: &str = "application/json";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, PartialEq, Eq)]
pub struct RequestConfig {
    endpoint: String,
    date: String,
    api_key: String,
    headers: BTreeMap<String, String>,
    timeout: Option<Duration>,
}

impl RequestConfig {
    /// Build a configuration for the feed's single-day window on `date`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, AppError> {
        let endpoint = endpoint.into();
        validate_endpoint(&endpoint)?;

        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(AppError::config(format!(
                "{API_KEY_VAR} is set but empty."
            )));
        }

        let headers = BTreeMap::from([
            ("Accept".to_string(), JSON_MEDIA_TYPE.to_string()),
            ("Content-Type".to_string(), JSON_MEDIA_TYPE.to_string()),
        ]);

        Ok(Self {
            endpoint,
            date: date.format(DATE_FORMAT).to_string(),
            api_key,
            headers,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from the process environment for today's local date.
    pub fn from_env() -> Result<Self, AppError> {
        let today = Local::now().date_naive();
        Self::from_lookup(today, |name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// `lookup` returns `None` for unset variables. Only the credential is
    /// required; the endpoint and timeout fall back to defaults.
    pub fn from_lookup<F>(date: NaiveDate, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::config(format!(
                    "Missing {API_KEY_VAR} in environment (.env); an api.nasa.gov key is required."
                ))
            })?;

        let endpoint = lookup(FEED_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| FEED_URL.to_string());

        // Blank counts as unset, same as the endpoint override.
        let timeout = match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self::new(endpoint, api_key, date)?.with_timeout(timeout))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requested day as `YYYY-MM-DD`; also the key into `near_earth_objects`.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Query parameters: credential plus a one-day window (start == end).
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("api_key", self.api_key.as_str()),
            ("start_date", self.date.as_str()),
            ("end_date", self.date.as_str()),
        ]
    }
}

impl std::fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestConfig")
            .field("endpoint", &self.endpoint)
            .field("date", &self.date)
            .field("api_key", &"<redacted>")
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), AppError> {
    let invalid = |why: String| {
        AppError::config(format!(
            "Feed endpoint must be an absolute http(s) URL, got '{endpoint}': {why}"
        ))
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs = raw.trim().parse::<u64>().map_err(|e| {
        AppError::config(format!("Invalid {TIMEOUT_VAR} '{raw}': {e}"))
    })?;
    if secs == 0 {
        return Err(AppError::config(format!(
            "{TIMEOUT_VAR} must be a positive number of seconds."
        )));
    }
    Ok(Duration::from_secs(secs))
}
