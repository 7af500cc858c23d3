//! Error types for party operations.

use crate::ids::PartyId;
use thiserror::Error;

/// Result type alias for party operations.
pub type Result<T> = std::result::Result<T, PartyError>;

/// Failures surfaced by the party store.
///
/// Every variant is local and recoverable. A failed operation never leaves a
/// party half-updated: the queue and playlist are only touched once the
/// party lock is held and nothing after that point can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// No party is registered under the given id.
    #[error("party '{0}' not found")]
    NotFound(PartyId),

    /// A vote kind outside up / down / neutral.
    #[error("invalid vote kind '{0}': expected up, down or null")]
    InvalidKind(String),

    /// A party lock was poisoned by a panicking writer.
    #[error("party registry corrupted: {0}")]
    RegistryCorruption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PartyError::NotFound(PartyId::new("ghost"));
        assert_eq!(err.to_string(), "party 'ghost' not found");

        let err = PartyError::InvalidKind("sideways".to_string());
        assert_eq!(
            err.to_string(),
            "invalid vote kind 'sideways': expected up, down or null"
        );
    }
}
