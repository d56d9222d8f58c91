//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for admin API requests
//! - [`ConfigError`] - Problems reading the server-injected runtime config

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (connection refused, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON encoding or parsing error
    #[error("JSON error: {0}")]
    JsonError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Errors reading the runtime config injected by the admin page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The global config object is not defined.
    #[error("runtime config `{0}` not present")]
    Missing(&'static str),
    /// The global exists but does not have the expected shape.
    #[error("runtime config is malformed: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::HttpError(500).to_string(), "HTTP error: 500");
        assert_eq!(
            FetchError::NetworkError("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::JsonError(_)));
    }
}
