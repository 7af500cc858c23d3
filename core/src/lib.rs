//! # Partyline Core
//!
//! Shared state for collaborative party playlists.
//!
//! Guests vote songs up, down or back to neutral; a playback client pushes
//! its current playlist and, in the same call, collects every vote cast
//! since its previous push. This crate owns that state and nothing else:
//! no HTTP, no social graph lookups, no I/O.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ PartyService      register / vote / drain │
//! ├──────────────────────────────────────────┤
//! │ PartyRegistry     RwLock<id → Arc<Party>> │
//! ├──────────────────────────────────────────┤
//! │ Party             Mutex<playlist, queue>  │
//! │   EventQueue      FIFO, drained on read   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//!
//! - The registry lock guards only the map. Lookups clone the party handle
//!   out and release it.
//! - Each party has its own mutex over its playlist and queue. Voting and
//!   draining hold it for the whole read-modify-write, so a drain is atomic
//!   with respect to concurrent votes.
//! - No lock is ever held while calling out of the crate.
//!
//! ## Example
//!
//! ```
//! use partyline_core::{PartyError, PartyId, PartyService, SongId, UserId, VoteKind};
//!
//! let service = PartyService::new();
//! let err = service
//!     .cast_vote(&PartyId::new("ghost"), SongId::new("s"), UserId::new("u"), VoteKind::Up)
//!     .unwrap_err();
//! assert!(matches!(err, PartyError::NotFound(_)));
//! ```

pub mod error;
pub mod ids;
pub mod metrics;
pub mod party;
pub mod queue;
pub mod registry;
pub mod service;
pub mod vote;

// Re-export commonly used types
pub use bytes::Bytes;
pub use error::{PartyError, Result};
pub use ids::{PartyId, SongId, UserId};
pub use party::Party;
pub use queue::EventQueue;
pub use registry::{PartyRegistry, Registration};
pub use service::PartyService;
pub use vote::{Event, VoteKind};
