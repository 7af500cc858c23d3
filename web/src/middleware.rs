//! Request id and tracing layers.
//!
//! Every request carries an `x-request-id`: the client's if it sent one,
//! otherwise a fresh UUID v4. The id is recorded on the request span and
//! echoed on the response.
//!
//! ```text
//! SetRequestId ─▶ TraceLayer(span: request_id, method, uri) ─▶ PropagateRequestId ─▶ handler
//! ```

use axum::{extract::Request, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap a router with request id assignment, propagation and a trace span.
#[must_use]
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri().path(),
    )
}
