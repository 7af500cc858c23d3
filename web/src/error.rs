//! Error types for web handlers.
//!
//! Bridges party and social graph errors to HTTP responses through Axum's
//! `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use partyline_core::PartyError;
use partyline_social::SocialGraphError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// Carries the status, a stable machine-readable code and a user-facing
/// message. The optional source is logged for server errors and never sent
/// to the client.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Attach the underlying error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into(), "BAD_REQUEST")
    }

    /// Create a 401 Unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message.into(), "UNAUTHORIZED")
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{resource} with id {id} not found"),
            "NOT_FOUND",
        )
    }

    /// Create a 502 Bad Gateway error.
    #[must_use]
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message.into(), "UPSTREAM_ERROR")
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_SERVER_ERROR",
        )
    }

    /// HTTP status this error renders with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    error = %source,
                    "Request failed"
                ),
                None => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    "Request failed"
                ),
            }
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<PartyError> for AppError {
    fn from(err: PartyError) -> Self {
        match &err {
            PartyError::NotFound(id) => Self::not_found("Party", id),
            PartyError::InvalidKind(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string(), "INVALID_KIND")
            }
            PartyError::RegistryCorruption(_) => {
                Self::internal("Party state unavailable").with_source(err.into())
            }
        }
    }
}

impl From<SocialGraphError> for AppError {
    fn from(err: SocialGraphError) -> Self {
        match err {
            SocialGraphError::Unauthorized => {
                Self::unauthorized("Access token rejected by the social graph")
            }
            other => Self::bad_gateway("Social graph request failed").with_source(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyline_core::PartyId;

    #[test]
    fn test_error_display() {
        let err = AppError::bad_request("Unknown route");
        assert_eq!(err.to_string(), "[BAD_REQUEST] Unknown route");
    }

    #[test]
    fn test_party_not_found() {
        let err = AppError::from(PartyError::NotFound(PartyId::new("ghost")));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "[NOT_FOUND] Party with id ghost not found");
    }

    #[test]
    fn test_invalid_kind_is_client_error() {
        let err = AppError::from(PartyError::InvalidKind("sideways".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_KIND");
    }

    #[test]
    fn test_corruption_hides_details() {
        let err = AppError::from(PartyError::RegistryCorruption("lock poisoned".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("poisoned"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_social_graph_errors() {
        let err = AppError::from(SocialGraphError::Unauthorized);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let err = AppError::from(SocialGraphError::RateLimited);
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "UPSTREAM_ERROR");
    }
}
