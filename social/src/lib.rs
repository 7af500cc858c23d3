//! # Partyline Social
//!
//! Social graph lookups for Partyline: which events a guest was invited to,
//! and who an access token belongs to.
//!
//! ## Example
//!
//! ```no_run
//! use partyline_social::{FacebookGraphClient, SocialGraph};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = FacebookGraphClient::new()?;
//!
//!     for event in graph.user_events("guest-access-token").await? {
//!         println!("{} {}", event.id, event.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Tokens are passed through untouched; this crate does not validate or
//! cache them.

pub mod client;
pub mod error;
pub mod graph;
pub mod types;

// Re-export main types for convenience
pub use client::{DEFAULT_GRAPH_URL, DEFAULT_TIMEOUT, FacebookGraphClient};
pub use error::{Result, SocialGraphError};
pub use graph::SocialGraph;
pub use types::{SocialEvent, SocialUser};
