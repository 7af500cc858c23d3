//! # Partyline Testing
//!
//! Testing utilities and helpers for Partyline.
//!
//! This crate provides:
//! - [`MockSocialGraph`]: scripted social graph with call counting
//! - [`PartyScenario`]: Given-When-Then driver for party services
//! - Fixtures for common setups
//!
//! ## Example
//!
//! ```
//! use partyline_core::VoteKind;
//! use partyline_testing::PartyScenario;
//!
//! PartyScenario::new()
//!     .given_party("p1", "library")
//!     .when_vote("p1", "s1", "u1", VoteKind::Up)
//!     .when_playlist("p1", "PL")
//!     .then_drained(|events| assert_eq!(events.len(), 1))
//!     .run();
//! ```

pub mod mocks;
pub mod scenario;

/// Shared setups for tests.
pub mod fixtures {
    use partyline_core::{Bytes, PartyId, PartyService};

    /// A service with one party registered under `id`.
    #[must_use]
    pub fn service_with_party(id: &str, library: &'static str) -> PartyService {
        let service = PartyService::new();
        service.register_party(PartyId::new(id), Bytes::from_static(library.as_bytes()));
        service
    }

    /// Route `tracing` output through the test harness.
    ///
    /// Safe to call from every test; only the first call installs a subscriber.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("partyline=debug"))
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use fixtures::{init_tracing, service_with_party};
pub use mocks::MockSocialGraph;
pub use scenario::PartyScenario;
