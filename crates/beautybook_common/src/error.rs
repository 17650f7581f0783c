// --- File: crates/beautybook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all BeautyBook errors.
///
/// Remote calls, configuration and local validation all report through this
/// enum so that call sites can log and degrade uniformly.
#[derive(Error, Debug)]
pub enum BeautybookError {
    /// The request never produced a response (connect, timeout, TLS...)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` is taken from the `error` field of the response body.
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl BeautybookError {
    /// HTTP status of the failed call, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BeautybookError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for BeautybookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BeautybookError::ParseError(err.to_string())
        } else {
            BeautybookError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BeautybookError {
    fn from(err: serde_json::Error) -> Self {
        BeautybookError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn api_error<T: fmt::Display>(status: u16, message: T) -> BeautybookError {
    BeautybookError::ApiError {
        status,
        message: message.to_string(),
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> BeautybookError {
    BeautybookError::ConfigError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_backend_message() {
        let err = api_error(401, "Unauthorized");
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        assert_eq!(
            BeautybookError::InternalError("identity header".to_string()).status(),
            None
        );
        assert_eq!(
            config_error("missing url").to_string(),
            "Configuration error: missing url"
        );
    }
}
