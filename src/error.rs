//! Error type for LibreTranslate API operations
//!
//! The backend reports every failure the same way: a non-success status with
//! an optional `{"error": "..."}` body. The client mirrors that with a single
//! error kind carrying a human-readable message; there is no retry or backoff
//! anywhere in this crate, recovery is left to the caller.

/// Fallback message used when the server response carries no `error` field.
pub const GENERIC_API_ERROR: &str = "Api Error";

/// A failed API call.
///
/// Covers transport-level failures (connection refused, timeout, malformed
/// JSON) and application-level rejections (non-2xx status) alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Create an error from a server-supplied or synthesized message
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
        }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API call failed: {}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::new(err.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
