//! Identifier newtypes.
//!
//! All three ids are opaque strings chosen by clients. They are kept apart
//! as distinct types so a song id can never be queued where a user id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the raw identifier.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Key of a party in the registry.
    PartyId
);

string_id!(
    /// Song a vote targets.
    SongId
);

string_id!(
    /// Identity recorded with a vote.
    ///
    /// Either the caller's raw auth token or an identity resolved through the
    /// social graph, depending on how the transport is configured. Never
    /// validated here.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&SongId::new("track-7")).unwrap_or_default();
        assert_eq!(json, "\"track-7\"");
    }

    #[test]
    fn test_ids_display_raw_value() {
        assert_eq!(PartyId::from("potato").to_string(), "potato");
        assert_eq!(UserId::new(String::from("u1")).as_str(), "u1");
    }
}
