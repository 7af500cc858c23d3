//! Process-wide map of party id to party.

use crate::error::{PartyError, Result};
use crate::ids::PartyId;
use crate::party::Party;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Outcome of [`PartyRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// No party existed under the id.
    Created,
    /// An existing party was replaced, along with its playlist and any
    /// undrained votes.
    Replaced,
}

impl Registration {
    /// Label used in metrics and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Replaced => "replaced",
        }
    }
}

/// Owner of every [`Party`].
///
/// The map lock only guards insertion and lookup. Callers get an
/// `Arc<Party>` back and the map lock is released before any party lock is
/// taken, so a slow party never blocks lookups of other parties.
///
/// Parties are fully built before insertion; a lookup sees either the old
/// entry or the new one.
#[derive(Debug, Default)]
pub struct PartyRegistry {
    parties: RwLock<HashMap<PartyId, Arc<Party>>>,
}

impl PartyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh party, overwriting any party with the same id.
    pub fn register(&self, id: PartyId, library: Bytes) -> Registration {
        let party = Arc::new(Party::new(id.clone(), library));

        let previous = self
            .parties
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, party);

        if previous.is_some() {
            Registration::Replaced
        } else {
            Registration::Created
        }
    }

    /// Looks up a party.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::NotFound`] if no party is registered under `id`.
    pub fn get(&self, id: &PartyId) -> Result<Arc<Party>> {
        self.parties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| PartyError::NotFound(id.clone()))
    }

    /// Whether a party is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &PartyId) -> bool {
        self.parties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Snapshot of every registered id, in no particular order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<PartyId> {
        self.parties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Number of registered parties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no party has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_get() {
        let registry = PartyRegistry::new();
        let outcome = registry.register(PartyId::new("p1"), Bytes::from_static(b"L"));

        assert_eq!(outcome, Registration::Created);
        let party = registry.get(&PartyId::new("p1")).unwrap();
        assert_eq!(party.id().as_str(), "p1");
        assert_eq!(party.library(), Bytes::from_static(b"L"));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let registry = PartyRegistry::new();
        let err = registry.get(&PartyId::new("ghost")).unwrap_err();
        assert_eq!(err, PartyError::NotFound(PartyId::new("ghost")));
    }

    #[test]
    fn test_register_overwrites() {
        let registry = PartyRegistry::new();
        registry.register(PartyId::new("p1"), Bytes::from_static(b"old"));
        let outcome = registry.register(PartyId::new("p1"), Bytes::from_static(b"new"));

        assert_eq!(outcome, Registration::Replaced);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&PartyId::new("p1")).unwrap().library(),
            Bytes::from_static(b"new")
        );
    }

    #[test]
    fn test_list_ids_snapshot() {
        let registry = PartyRegistry::new();
        assert!(registry.is_empty());
        registry.register(PartyId::new("b"), Bytes::new());
        registry.register(PartyId::new("a"), Bytes::new());

        let mut ids = registry.list_ids();
        ids.sort();
        assert_eq!(ids, vec![PartyId::new("a"), PartyId::new("b")]);
        assert!(registry.contains(&PartyId::new("a")));
        assert!(!registry.contains(&PartyId::new("c")));
    }
}
