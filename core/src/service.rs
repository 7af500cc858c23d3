//! Public operations on parties.

use crate::error::Result;
use crate::ids::{PartyId, SongId, UserId};
use crate::metrics;
use crate::registry::{PartyRegistry, Registration};
use crate::vote::{Event, VoteKind};
use bytes::Bytes;
use std::sync::Arc;

/// Entry point the transport calls into.
///
/// Every operation re-fetches the party from the registry, so a handler
/// never works on a party that has since been replaced. All operations are
/// synchronous and lock-local: nothing here performs I/O, and no lock is held
/// across a call out of this crate.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use partyline_core::{PartyId, PartyService, SongId, UserId, VoteKind};
///
/// let service = PartyService::new();
/// let party = PartyId::new("p1");
/// service.register_party(party.clone(), Bytes::from_static(b"library"));
///
/// service
///     .cast_vote(&party, SongId::new("s1"), UserId::new("u1"), VoteKind::Up)
///     .unwrap();
///
/// let events = service.set_playlist(&party, Bytes::from_static(b"PL")).unwrap();
/// assert_eq!(events.len(), 1);
/// assert!(service.set_playlist(&party, Bytes::new()).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartyService {
    registry: Arc<PartyRegistry>,
}

impl PartyService {
    /// Creates a service over an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing registry.
    #[must_use]
    pub const fn with_registry(registry: Arc<PartyRegistry>) -> Self {
        Self { registry }
    }

    /// The registry backing this service.
    #[must_use]
    pub const fn registry(&self) -> &Arc<PartyRegistry> {
        &self.registry
    }

    /// Creates a party, replacing any party registered under the same id.
    ///
    /// Replacement is last-writer-wins: the previous playlist and every vote
    /// it had not yet drained are discarded.
    pub fn register_party(&self, id: PartyId, library: Bytes) -> Registration {
        let library_bytes = library.len();
        let outcome = self.registry.register(id.clone(), library);
        let party_count = self.registry.len();

        metrics::record_registration(outcome, party_count);
        match outcome {
            Registration::Created => {
                tracing::debug!(party_id = %id, library_bytes, "Party registered");
            }
            Registration::Replaced => {
                tracing::info!(party_id = %id, library_bytes, "Party re-registered, previous state discarded");
            }
        }

        outcome
    }

    /// Replaces the playlist and returns every vote cast since the last call.
    ///
    /// Votes come back in the order they were cast. A vote racing with this
    /// call lands entirely in this batch or entirely in the next.
    ///
    /// # Errors
    ///
    /// - [`PartyError::NotFound`](crate::PartyError::NotFound) if the party is not registered
    /// - [`PartyError::RegistryCorruption`](crate::PartyError::RegistryCorruption) if its lock is poisoned
    pub fn set_playlist(&self, id: &PartyId, playlist: Bytes) -> Result<Vec<Event>> {
        let party = self.registry.get(id)?;
        let playlist_bytes = playlist.len();
        let events = party.replace_playlist(playlist)?;

        metrics::record_drain(events.len());
        tracing::debug!(
            party_id = %id,
            playlist_bytes,
            drained = events.len(),
            "Playlist updated"
        );

        Ok(events)
    }

    /// Current playlist of a party. Empty until the first update.
    ///
    /// # Errors
    ///
    /// - [`PartyError::NotFound`](crate::PartyError::NotFound) if the party is not registered
    /// - [`PartyError::RegistryCorruption`](crate::PartyError::RegistryCorruption) if its lock is poisoned
    pub fn get_playlist(&self, id: &PartyId) -> Result<Bytes> {
        self.registry.get(id)?.playlist()
    }

    /// Library supplied when the party was registered.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::NotFound`](crate::PartyError::NotFound) if the party is not registered.
    pub fn get_library(&self, id: &PartyId) -> Result<Bytes> {
        Ok(self.registry.get(id)?.library())
    }

    /// Queues a vote for the next playlist update.
    ///
    /// # Errors
    ///
    /// - [`PartyError::NotFound`](crate::PartyError::NotFound) if the party is not registered
    /// - [`PartyError::RegistryCorruption`](crate::PartyError::RegistryCorruption) if its lock is poisoned
    pub fn cast_vote(
        &self,
        id: &PartyId,
        song_id: SongId,
        user_id: UserId,
        kind: VoteKind,
    ) -> Result<()> {
        let party = self.registry.get(id)?;
        let pending = party.push_event(Event::new(kind, user_id, song_id))?;

        metrics::record_vote(kind);
        tracing::debug!(party_id = %id, %kind, pending, "Vote queued");

        Ok(())
    }

    /// Votes waiting for the next playlist update.
    ///
    /// # Errors
    ///
    /// - [`PartyError::NotFound`](crate::PartyError::NotFound) if the party is not registered
    /// - [`PartyError::RegistryCorruption`](crate::PartyError::RegistryCorruption) if its lock is poisoned
    pub fn pending_votes(&self, id: &PartyId) -> Result<usize> {
        self.registry.get(id)?.pending_events()
    }

    /// Snapshot of every registered party id, in no particular order.
    #[must_use]
    pub fn list_party_ids(&self) -> Vec<PartyId> {
        self.registry.list_ids()
    }
}
