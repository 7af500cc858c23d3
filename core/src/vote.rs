//! Votes and the events they produce.

use crate::error::PartyError;
use crate::ids::{SongId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a vote.
///
/// On the wire a kind is either a path segment (`up`, `down`, `null`) or a
/// signed weight (`1`, `-1`, `0`). Both conversions reject every other value
/// with [`PartyError::InvalidKind`], so an illegal kind can never reach a
/// queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum VoteKind {
    /// +1
    Up,
    /// -1
    Down,
    /// 0. Still a recorded vote: it cancels an earlier up or down.
    Neutral,
}

impl VoteKind {
    /// All kinds, in weight order.
    pub const ALL: [Self; 3] = [Self::Up, Self::Neutral, Self::Down];

    /// Signed weight of the vote.
    #[must_use]
    pub const fn weight(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Neutral => 0,
            Self::Down => -1,
        }
    }

    /// Path segment used by the HTTP API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Neutral => "null",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteKind {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "null" | "neutral" => Ok(Self::Neutral),
            other => Err(PartyError::InvalidKind(other.to_string())),
        }
    }
}

impl TryFrom<i8> for VoteKind {
    type Error = PartyError;

    fn try_from(weight: i8) -> Result<Self, Self::Error> {
        match weight {
            1 => Ok(Self::Up),
            0 => Ok(Self::Neutral),
            -1 => Ok(Self::Down),
            other => Err(PartyError::InvalidKind(other.to_string())),
        }
    }
}

impl From<VoteKind> for i8 {
    fn from(kind: VoteKind) -> Self {
        kind.weight()
    }
}

/// One recorded vote.
///
/// Serialized with the field names the playback client expects:
/// `{"Type": 1, "UserId": "...", "SongId": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    #[serde(rename = "Type")]
    kind: VoteKind,
    user_id: UserId,
    song_id: SongId,
}

impl Event {
    /// Creates a vote event.
    #[must_use]
    pub const fn new(kind: VoteKind, user_id: UserId, song_id: SongId) -> Self {
        Self {
            kind,
            user_id,
            song_id,
        }
    }

    /// Direction of the vote.
    #[must_use]
    pub const fn kind(&self) -> VoteKind {
        self.kind
    }

    /// Who cast the vote.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Which song the vote targets.
    #[must_use]
    pub const fn song_id(&self) -> &SongId {
        &self.song_id
    }
}
