//! HTTP request handlers.
//!
//! Every route except the health probes starts with the caller's social
//! graph access token. Party routes follow it with the party id.

pub mod discovery;
pub mod health;
pub mod party;
pub mod vote;

use serde::Deserialize;

/// `/:auth_token/:party_id/...`
#[derive(Debug, Deserialize)]
pub struct PartyPath {
    /// Caller's access token.
    pub auth_token: String,
    /// Target party.
    pub party_id: String,
}

/// `/:auth_token/...`
#[derive(Debug, Deserialize)]
pub struct TokenPath {
    /// Caller's access token.
    pub auth_token: String,
}
