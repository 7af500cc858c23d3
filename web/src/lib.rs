//! HTTP transport for Partyline.
//!
//! Maps the party store and the social graph onto the routes the playback
//! and guest clients speak. Handlers stay thin: parse the path, call the
//! core, map the error.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │ Axum router    request id, trace, CORS    │
//! ├───────────────────────────────────────────┤
//! │ Handlers       path → core call → JSON    │
//! ├─────────────────────┬─────────────────────┤
//! │ PartyService (sync) │ SocialGraph (async) │
//! └─────────────────────┴─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use partyline_core::PartyService;
//! use partyline_social::FacebookGraphClient;
//! use partyline_web::{build_router, AppState, DEFAULT_MAX_BODY_BYTES};
//!
//! let state = AppState::new(PartyService::new(), FacebookGraphClient::new()?);
//! let app = build_router(state, DEFAULT_MAX_BODY_BYTES);
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::RequestId;
pub use middleware::{with_request_tracing, REQUEST_ID_HEADER};
pub use router::{build_router, DEFAULT_MAX_BODY_BYTES};
pub use state::{AppState, InvalidVoterIdentity, VoterIdentity};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
