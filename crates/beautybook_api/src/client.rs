// --- File: crates/beautybook_api/src/client.rs ---
//! Shared request plumbing for the backend functions.
//!
//! Attaches the identity header, sends the request and turns non-success
//! answers into [`BeautybookError::ApiError`] carrying the backend's message.

use beautybook_common::create_client;
use beautybook_common::error::{api_error, BeautybookError};
use beautybook_config::ApiConfig;
use beautybook_platform::Platform;
use reqwest::header::HeaderValue;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the serialized session identity.
pub const TELEGRAM_USER_HEADER: &str = "X-Telegram-User";

/// Message used when the error body is not JSON at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Message used when the error body is JSON without an `error` string.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Base URLs of the three resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub bookings: String,
    pub notifications: String,
    pub profile: String,
}

impl From<&ApiConfig> for ApiEndpoints {
    fn from(config: &ApiConfig) -> Self {
        Self {
            bookings: config.bookings_url.clone(),
            notifications: config.notifications_url.clone(),
            profile: config.profile_url.clone(),
        }
    }
}

/// Client for the bookings, notifications and profile functions.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Arc<ApiEndpoints>,
    platform: Arc<dyn Platform>,
}

impl ApiClient {
    /// Creates a client with its own HTTP connection pool.
    pub fn new(config: &ApiConfig, platform: Arc<dyn Platform>) -> Result<Self, BeautybookError> {
        let http = create_client(config.timeout_secs)?;
        Ok(Self::with_client(http, ApiEndpoints::from(config), platform))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_client(http: Client, endpoints: ApiEndpoints, platform: Arc<dyn Platform>) -> Self {
        Self {
            http,
            endpoints: Arc::new(endpoints),
            platform,
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    /// The identity header value: the session user as JSON, or `null`.
    ///
    /// Non-ASCII characters are `\u`-escaped so Cyrillic names stay valid
    /// header bytes while remaining the same JSON document.
    pub fn identity_header(&self) -> Result<HeaderValue, BeautybookError> {
        let json = serde_json::to_string(&self.platform.user())?;
        HeaderValue::from_str(&escape_non_ascii(&json))
            .map_err(|e| BeautybookError::InternalError(format!("identity header: {}", e)))
    }

    /// Sends a request and decodes a successful JSON answer.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, BeautybookError> {
        let response = request
            .header(TELEGRAM_USER_HEADER, self.identity_header()?)
            .send()
            .await?;

        let status = response.status();
        debug!(url = %response.url(), %status, "backend response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            warn!(%status, "backend call failed: {}", message);
            return Err(api_error(status.as_u16(), message));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Extracts the user-facing message from an error response body.
///
/// A truthy `error` scalar yields its text (`{"error": 5}` gives `"5"`);
/// other JSON yields [`REQUEST_FAILED_MESSAGE`]; anything unparseable yields
/// [`NETWORK_ERROR_MESSAGE`].
pub fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(scalar_message)
            .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        Err(_) => NETWORK_ERROR_MESSAGE.to_string(),
    }
}

// Objects and arrays carry no displayable message.
fn scalar_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(escaped, "\\u{:04x}", unit);
            }
        }
    }
    escaped
}
