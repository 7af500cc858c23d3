//! Party discovery through the social graph.

use super::TokenPath;
use crate::WebResult;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use partyline_core::PartyId;
use partyline_social::SocialGraph;
use serde::Serialize;

/// A social graph event, flagged when a party is running under its id.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiscoveredParty {
    /// Event id, also the party id.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Event start, as reported by the graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Whether a party with this id is registered.
    pub registered: bool,
}

/// Events the token holder is invited to.
///
/// # Endpoint
///
/// ```text
/// GET /:auth_token/getParties
/// ```
///
/// # Errors
///
/// 401 if the graph rejects the token, 502 for any other graph failure.
pub async fn get_parties<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<TokenPath>,
) -> WebResult<Json<Vec<DiscoveredParty>>> {
    let events = state.social.user_events(&path.auth_token).await?;
    let registry = state.parties.registry();

    let parties = events
        .into_iter()
        .map(|event| DiscoveredParty {
            registered: registry.contains(&PartyId::new(event.id.as_str())),
            id: event.id,
            name: event.name,
            start_time: event.start_time,
        })
        .collect();

    Ok(Json(parties))
}
