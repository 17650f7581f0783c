// --- File: crates/beautybook_common/src/http/client.rs ---
use reqwest::{header, Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Creates a new HTTP client for the backend functions.
///
/// Every request sent through the client carries
/// `Content-Type: application/json`, which the backend expects even on GETs.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .default_headers(headers)
        .build()
}
