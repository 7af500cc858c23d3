//! A single party session.

use crate::error::{PartyError, Result};
use crate::ids::PartyId;
use crate::queue::EventQueue;
use crate::vote::Event;
use bytes::Bytes;
use std::sync::{Mutex, MutexGuard};

/// Mutable half of a party, guarded by the party lock.
#[derive(Debug, Default)]
struct PartyState {
    playlist: Bytes,
    events: EventQueue,
}

/// One active party.
///
/// The library is fixed at registration and read without locking. The
/// playlist and the vote queue share one mutex so that replacing the
/// playlist and draining the queue happen as a single step relative to
/// concurrent votes.
#[derive(Debug)]
pub struct Party {
    id: PartyId,
    library: Bytes,
    state: Mutex<PartyState>,
}

impl Party {
    /// Creates a party with an empty playlist and an empty queue.
    #[must_use]
    pub fn new(id: PartyId, library: Bytes) -> Self {
        Self {
            id,
            library,
            state: Mutex::new(PartyState::default()),
        }
    }

    /// Registry key of this party.
    #[must_use]
    pub const fn id(&self) -> &PartyId {
        &self.id
    }

    /// Library blob supplied at registration.
    #[must_use]
    pub fn library(&self) -> Bytes {
        self.library.clone()
    }

    /// Current playlist blob.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::RegistryCorruption`] if the party lock is poisoned.
    pub fn playlist(&self) -> Result<Bytes> {
        Ok(self.lock()?.playlist.clone())
    }

    /// Appends a vote to the queue.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::RegistryCorruption`] if the party lock is poisoned.
    pub fn push_event(&self, event: Event) -> Result<usize> {
        let mut state = self.lock()?;
        state.events.push(event);
        Ok(state.events.len())
    }

    /// Replaces the playlist and drains the queue under one lock hold.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::RegistryCorruption`] if the party lock is
    /// poisoned. Neither field is touched in that case.
    pub fn replace_playlist(&self, playlist: Bytes) -> Result<Vec<Event>> {
        let mut state = self.lock()?;
        state.playlist = playlist;
        Ok(state.events.drain())
    }

    /// Number of votes waiting for the next drain.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::RegistryCorruption`] if the party lock is poisoned.
    pub fn pending_events(&self) -> Result<usize> {
        Ok(self.lock()?.events.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, PartyState>> {
        self.state.lock().map_err(|_| {
            PartyError::RegistryCorruption(format!("lock for party '{}' poisoned", self.id))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ids::{SongId, UserId};
    use crate::vote::VoteKind;
    use std::sync::Arc;

    fn party() -> Party {
        Party::new(PartyId::new("p1"), Bytes::from_static(b"library"))
    }

    #[test]
    fn test_new_party_is_empty() {
        let party = party();
        assert_eq!(party.library(), Bytes::from_static(b"library"));
        assert!(party.playlist().unwrap().is_empty());
        assert_eq!(party.pending_events().unwrap(), 0);
    }

    #[test]
    fn test_replace_playlist_drains_queue() {
        let party = party();
        let event = Event::new(VoteKind::Up, UserId::new("u1"), SongId::new("s1"));
        assert_eq!(party.push_event(event.clone()).unwrap(), 1);

        let drained = party.replace_playlist(Bytes::from_static(b"PL")).unwrap();
        assert_eq!(drained, vec![event]);
        assert_eq!(party.playlist().unwrap(), Bytes::from_static(b"PL"));
        assert_eq!(party.pending_events().unwrap(), 0);
    }

    #[test]
    fn test_poisoned_lock_reports_corruption() {
        let party = Arc::new(party());

        let poisoner = Arc::clone(&party);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("writer died mid-update");
        })
        .join();

        let err = party.replace_playlist(Bytes::new()).unwrap_err();
        assert!(matches!(err, PartyError::RegistryCorruption(_)));
    }
}
