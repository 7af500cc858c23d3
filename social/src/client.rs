//! Facebook Graph API client

use crate::{
    error::{Result, SocialGraphError},
    graph::SocialGraph,
    types::{GraphPage, SocialEvent, SocialUser},
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default Graph API endpoint
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Facebook Graph API client
#[derive(Clone, Debug)]
pub struct FacebookGraphClient {
    client: Client,
    graph_url: String,
}

impl FacebookGraphClient {
    /// Create a client against the public Graph API
    ///
    /// # Errors
    ///
    /// Returns `SocialGraphError::ClientSetup` if the HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_GRAPH_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against a custom endpoint
    ///
    /// # Errors
    ///
    /// Returns `SocialGraphError::ClientSetup` if the HTTP client cannot be built
    pub fn with_config(graph_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SocialGraphError::ClientSetup(e.to_string()))?;

        Ok(Self {
            client,
            graph_url: graph_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint this client talks to
    #[must_use]
    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let result = self.fetch(path, query).await;
        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(
            "partyline_social_requests_total",
            "endpoint" => endpoint,
            "outcome" => outcome
        )
        .increment(1);

        if let Err(error) = &result {
            tracing::debug!(endpoint, %error, "Social graph request failed");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{path}", self.graph_url))
            .query(query)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SocialGraphError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(SocialGraphError::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(SocialGraphError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}

impl SocialGraph for FacebookGraphClient {
    async fn user_events(&self, access_token: &str) -> Result<Vec<SocialEvent>> {
        let page: GraphPage<SocialEvent> = self
            .get_json("events", "/me/events", &[("access_token", access_token)])
            .await?;
        Ok(page.data)
    }

    async fn resolve_identity(&self, access_token: &str) -> Result<SocialUser> {
        self.get_json(
            "identity",
            "/me",
            &[("fields", "id,name"), ("access_token", access_token)],
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FacebookGraphClient::new().unwrap();
        assert_eq!(client.graph_url(), "https://graph.facebook.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            FacebookGraphClient::with_config("http://localhost:9999/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.graph_url(), "http://localhost:9999");
    }
}
