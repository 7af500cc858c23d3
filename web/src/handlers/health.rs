//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use partyline_social::SocialGraph;
use serde::Serialize;

/// Liveness probe.
///
/// # Endpoint
///
/// ```text
/// GET /ping
/// ```
#[allow(clippy::unused_async)]
pub async fn ping() -> StatusCode {
    StatusCode::OK
}

/// Health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Parties currently registered.
    pub parties: usize,
}

/// Health check with party count.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "parties": 3
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check<G: SocialGraph>(State(state): State<AppState<G>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        parties: state.parties.registry().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyline_testing::{service_with_party, MockSocialGraph};

    #[tokio::test]
    async fn test_ping() {
        assert_eq!(ping().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_counts_parties() {
        let state = AppState::new(service_with_party("p1", "lib"), MockSocialGraph::new());

        let Json(health) = health_check(State(state)).await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.parties, 1);
    }
}
