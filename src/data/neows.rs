//! NeoWs feed integration: one blocking GET for a single-day window.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::RequestConfig;
use crate::domain::{FeedResponse, RawNeoObject};
use crate::error::AppError;

/// Upper bound on how much of an error body is echoed into diagnostics.
const ERROR_BODY_EXCERPT: usize = 512;

pub struct NeoWsClient {
    client: Client,
}

impl NeoWsClient {
    /// Build a client honoring the configured timeout, if any.
    pub fn new(config: &RequestConfig) -> Result<Self, AppError> {
        // `None` also clears reqwest's blocking default, so an unconfigured run
        // waits on the transport alone.
        let client = Client::builder()
            .default_headers(header_map(config)?)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                AppError::fetch(
                    config.endpoint(),
                    None,
                    format!("failed to build HTTP client: {e}"),
                )
            })?;
        Ok(Self { client })
    }

    /// Fetch the objects listed under `config.date()`.
    ///
    /// An empty list for the day is a valid result; an absent day key is not.
    ///
    /// Errors never include the request URL; its query carries the key.
    pub fn fetch_day(&self, config: &RequestConfig) -> Result<Vec<RawNeoObject>, AppError> {
        let endpoint = config.endpoint();
        info!(endpoint, date = config.date(), "requesting NEO feed");

        let resp = self
            .client
            .get(endpoint)
            .query(&config.query())
            .send()
            .map_err(|e| {
                AppError::fetch(endpoint, None, format!("request failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        debug!(status = status.as_u16(), "feed responded");
        if !status.is_success() {
            return Err(AppError::fetch(
                endpoint,
                Some(status.as_u16()),
                format!("HTTP status {status}{}", body_excerpt(resp)),
            ));
        }

        let body: FeedResponse = resp.json().map_err(|e| {
            AppError::fetch(
                endpoint,
                Some(status.as_u16()),
                format!("failed to parse feed response: {}", e.without_url()),
            )
        })?;

        extract_day(body, config)
    }
}

/// Pull the requested day out of a decoded feed payload.
///
/// Objects are decoded one at a time so a bad one is reported by identity.
pub fn extract_day(
    mut body: FeedResponse,
    config: &RequestConfig,
) -> Result<Vec<RawNeoObject>, AppError> {
    if let Some(count) = body.element_count {
        debug!(element_count = count, "feed element count");
    }

    let objects = body
        .near_earth_objects
        .remove(config.date())
        .ok_or_else(|| AppError::MissingDateKey {
            endpoint: config.endpoint().to_string(),
            date: config.date().to_string(),
        })?;

    let objects = objects
        .into_iter()
        .map(decode_object)
        .collect::<Result<Vec<_>, _>>()?;

    info!(date = config.date(), objects = objects.len(), "feed day extracted");
    Ok(objects)
}

/// Decode one feed object, naming it in the error when it does not fit.
pub fn decode_object(value: Value) -> Result<RawNeoObject, AppError> {
    let label = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string()
    };
    let (id, name) = (label("id"), label("name"));
    serde_json::from_value(value).map_err(|e| AppError::MalformedRecord {
        id,
        name,
        reason: e.to_string(),
    })
}

fn header_map(config: &RequestConfig) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in config.headers() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::config(format!("Invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::config(format!("Invalid header value '{value}': {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn body_excerpt(resp: Response) -> String {
    match resp.text() {
        Ok(text) if !text.trim().is_empty() => {
            let text = text.trim();
            let cut = text
                .char_indices()
                .nth(ERROR_BODY_EXCERPT)
                .map(|(idx, _)| idx)
                .unwrap_or(text.len());
            format!(": {}", &text[..cut])
        }
        _ => String::new(),
    }
}
