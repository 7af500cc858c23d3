//! Prometheus exporter.
//!
//! Installs the global recorder that the core and the social client record
//! into, and serves the rendered text on its own listener so scrapes never
//! compete with party traffic.
//!
//! ```text
//! GET http://{METRICS_HOST}:{METRICS_PORT}/metrics
//! ```

use axum::{routing::get, Router};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
    /// Failed to bind HTTP server
    #[error("Failed to bind metrics server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Prometheus metrics server.
pub struct MetricsServer {
    addr: SocketAddr,
    handle: Option<PrometheusHandle>,
}

impl MetricsServer {
    /// Create a new metrics server bound to `addr` once spawned.
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self { addr, handle: None }
    }

    /// Install the recorder and register metric descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Install`] if the recorder cannot be installed.
    /// A recorder that is already installed is tolerated with a warning.
    pub fn install(&mut self) -> Result<(), MetricsError> {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                } else {
                    return Err(MetricsError::Install(err_msg));
                }
            }
        }

        register_metrics();
        Ok(())
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if this server did not install the recorder.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }

    /// Bind the listener and serve `/metrics` in a background task.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Bind`] if the address cannot be bound.
    pub async fn spawn(self) -> Result<JoinHandle<()>, MetricsError> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;

        tracing::info!(
            addr = %self.addr,
            "Metrics server started - available at http://{}/metrics",
            self.addr
        );

        let server = Arc::new(self);
        let app = Router::new().route(
            "/metrics",
            get(move || {
                let body = server.render().unwrap_or_default();
                async move { body }
            }),
        );

        Ok(tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Metrics server stopped");
            }
        }))
    }
}

/// Register descriptions for every metric the process records.
fn register_metrics() {
    partyline_core::metrics::register_party_metrics();
    describe_counter!(
        "partyline_social_requests_total",
        "Social graph requests by endpoint and outcome"
    );
}
