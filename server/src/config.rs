//! Configuration management for the Partyline server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unparseable numbers and flags fall back to their defaults; an unknown
//! voter identity mode is rejected.

use partyline_web::{InvalidVoterIdentity, VoterIdentity, DEFAULT_MAX_BODY_BYTES};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuration errors that stop startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `VOTER_IDENTITY` is neither `token` nor `resolved`
    #[error("VOTER_IDENTITY: {0}")]
    VoterIdentity(#[from] InvalidVoterIdentity),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Prometheus exporter configuration
    pub metrics: MetricsConfig,
    /// Social graph configuration
    pub social: SocialConfig,
    /// Party ids registered at boot with an empty library
    pub seed_parties: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

/// Metrics configuration
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Serve `/metrics` on a separate listener
    pub enabled: bool,
    /// Metrics server host (for Prometheus scraping)
    pub host: String,
    /// Metrics server port
    pub port: u16,
}

/// Social graph configuration
#[derive(Debug, Clone)]
pub struct SocialConfig {
    /// Graph API base URL
    pub graph_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// How votes are attributed to users
    pub voter_identity: VoterIdentity,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `VOTER_IDENTITY` is set to an unknown mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `VOTER_IDENTITY` is set to an unknown mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let voter_identity = match lookup("VOTER_IDENTITY") {
            Some(mode) => mode.parse()?,
            None => VoterIdentity::default(),
        };

        Ok(Self {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "SERVER_PORT", 3100),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
                shutdown_timeout: parse_or(&lookup, "SHUTDOWN_TIMEOUT", 30),
            },
            metrics: MetricsConfig {
                enabled: parse_or(&lookup, "METRICS_ENABLED", false),
                host: lookup("METRICS_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "METRICS_PORT", 9100),
            },
            social: SocialConfig {
                graph_url: lookup("SOCIAL_GRAPH_URL")
                    .unwrap_or_else(|| partyline_social::DEFAULT_GRAPH_URL.to_string()),
                timeout: parse_or(&lookup, "SOCIAL_GRAPH_TIMEOUT", 10),
                voter_identity,
            },
            seed_parties: lookup("SEED_PARTIES")
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Main listener address.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Metrics listener address.
    #[must_use]
    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.metrics.host, self.metrics.port)
    }

    /// Graceful shutdown timeout.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_timeout)
    }

    /// Social graph request timeout.
    #[must_use]
    pub const fn social_timeout(&self) -> Duration {
        Duration::from_secs(self.social.timeout)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:3100");
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(30));
        assert!(!config.metrics.enabled);
        assert_eq!(config.metrics_addr(), "0.0.0.0:9100");
        assert_eq!(config.social.graph_url, "https://graph.facebook.com");
        assert_eq!(config.social_timeout(), Duration::from_secs(10));
        assert_eq!(config.social.voter_identity, VoterIdentity::Token);
        assert!(config.seed_parties.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("METRICS_ENABLED", "true"),
            ("METRICS_PORT", "9999"),
            ("SOCIAL_GRAPH_URL", "http://localhost:4000"),
            ("VOTER_IDENTITY", "resolved"),
            ("SEED_PARTIES", "potato, ,tomato"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.port, 9999);
        assert_eq!(config.social.graph_url, "http://localhost:4000");
        assert_eq!(config.social.voter_identity, VoterIdentity::Resolved);
        assert_eq!(config.seed_parties, vec!["potato", "tomato"]);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = load(&[("SERVER_PORT", "not-a-port"), ("MAX_BODY_BYTES", "-1")]).unwrap();

        assert_eq!(config.server.port, 3100);
        assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_unknown_voter_identity_is_rejected() {
        let err = load(&[("VOTER_IDENTITY", "guess")]).unwrap_err();
        assert!(err.to_string().contains("guess"));
    }
}
