//! Partyline HTTP server.
//!
//! Boots the party store, the social graph client and the HTTP router from
//! environment configuration, then serves until SIGINT or SIGTERM.

mod config;
mod metrics;

use crate::config::Config;
use crate::metrics::MetricsServer;
use anyhow::Context;
use partyline_core::{Bytes, PartyId, PartyService};
use partyline_social::FacebookGraphClient;
use partyline_web::{build_router, AppState};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("partyline={},tower_http=debug", config.server.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Partyline server");
    info!(
        address = %config.server_addr(),
        graph_url = %config.social.graph_url,
        voter_identity = %config.social.voter_identity,
        metrics_enabled = config.metrics.enabled,
        "Configuration loaded"
    );

    if config.metrics.enabled {
        let addr = config
            .metrics_addr()
            .parse()
            .with_context(|| format!("invalid metrics address {}", config.metrics_addr()))?;
        let mut metrics_server = MetricsServer::new(addr);
        metrics_server.install()?;
        let _metrics_task = metrics_server.spawn().await?;
    }

    let parties = PartyService::new();
    for id in &config.seed_parties {
        parties.register_party(PartyId::new(id.as_str()), Bytes::new());
        info!(party_id = %id, "Seeded party");
    }

    let social = FacebookGraphClient::with_config(&config.social.graph_url, config.social_timeout())
        .context("failed to build social graph client")?;

    let state = AppState::new(parties, social).with_voter_identity(config.social.voter_identity);
    let app = build_router(state, config.server.max_body_bytes);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let stop = Arc::clone(&stop);
            async move { stop.notified().await }
        })
        .into_future();
    tokio::pin!(server);

    let signalled = tokio::select! {
        result = &mut server => {
            result?;
            false
        }
        () = shutdown_signal() => true,
    };

    if signalled {
        stop.notify_one();
        if tokio::time::timeout(config.shutdown_timeout(), server).await.is_err() {
            warn!(
                timeout_secs = config.server.shutdown_timeout,
                "Shutdown timeout elapsed, dropping open connections"
            );
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for:
/// - Ctrl+C (SIGINT)
/// - SIGTERM (in production environments)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
