//! Application state shared by every handler.

use partyline_core::PartyService;
use partyline_social::SocialGraph;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How the vote handler decides which user cast a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoterIdentity {
    /// Record the raw auth token from the path as the user id.
    #[default]
    Token,
    /// Resolve the token through the social graph and record the resolved id.
    Resolved,
}

impl VoterIdentity {
    /// Configuration literal for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for VoterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown voter identity mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid voter identity mode '{0}': expected token or resolved")]
pub struct InvalidVoterIdentity(pub String);

impl FromStr for VoterIdentity {
    type Err = InvalidVoterIdentity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(Self::Token),
            "resolved" => Ok(Self::Resolved),
            _ => Err(InvalidVoterIdentity(s.to_string())),
        }
    }
}

/// State handed to every handler through `State<AppState<G>>`.
///
/// Cloning is cheap: the party service shares its registry and the social
/// graph client sits behind an `Arc`.
pub struct AppState<G> {
    /// Party store.
    pub parties: PartyService,
    /// Social graph used for discovery and identity resolution.
    pub social: Arc<G>,
    /// Voter identity mode.
    pub voter_identity: VoterIdentity,
}

impl<G: SocialGraph> AppState<G> {
    /// Create state over a party service and a social graph client.
    #[must_use]
    pub fn new(parties: PartyService, social: G) -> Self {
        Self {
            parties,
            social: Arc::new(social),
            voter_identity: VoterIdentity::default(),
        }
    }

    /// Set the voter identity mode.
    #[must_use]
    pub const fn with_voter_identity(mut self, voter_identity: VoterIdentity) -> Self {
        self.voter_identity = voter_identity;
        self
    }
}

// Manual impl: `G` itself does not need to be `Clone`.
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            parties: self.parties.clone(),
            social: Arc::clone(&self.social),
            voter_identity: self.voter_identity,
        }
    }
}

impl<G> fmt::Debug for AppState<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("parties", &self.parties)
            .field("voter_identity", &self.voter_identity)
            .finish_non_exhaustive()
    }
}
