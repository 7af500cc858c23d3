//! Custom Axum extractors.

use crate::middleware::REQUEST_ID_HEADER;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Request id for log correlation.
///
/// Read from the `x-request-id` header set by
/// [`with_request_tracing`](crate::middleware::with_request_tracing). Outside
/// that layer a fresh UUID v4 is generated so handlers always have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

        Ok(Self(request_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_request_id_from_header() {
        let (mut parts, ()) = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap()
            .into_parts();

        let RequestId(id) = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id, "abc-123");
    }

    #[tokio::test]
    async fn test_request_id_generated_when_missing() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();

        let RequestId(id) = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
