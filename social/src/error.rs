//! Error types for social graph lookups

use thiserror::Error;

/// Result type alias for social graph operations.
pub type Result<T> = std::result::Result<T, SocialGraphError>;

/// Errors that can occur when talking to the social graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocialGraphError {
    /// HTTP client could not be built
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Access token rejected by the graph
    #[error("Unauthorized - access token rejected")]
    Unauthorized,

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Graph returned an error status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the graph
        message: String,
    },
}

impl From<reqwest::Error> for SocialGraphError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the access token; keep them out of messages
        let err = err.without_url();
        if err.is_decode() {
            Self::ResponseParseFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SocialGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::ResponseParseFailed(err.to_string())
    }
}
