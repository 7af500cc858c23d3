//! Guest voting endpoint.

use crate::WebResult;
use crate::extractors::RequestId;
use crate::state::{AppState, VoterIdentity};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use partyline_core::{PartyId, SongId, UserId, VoteKind};
use partyline_social::SocialGraph;
use serde::Deserialize;

/// `/:auth_token/:party_id/:song_id/:vote`
#[derive(Debug, Deserialize)]
pub struct VotePath {
    /// Caller's access token.
    pub auth_token: String,
    /// Target party.
    pub party_id: String,
    /// Song being voted on.
    pub song_id: String,
    /// `up`, `down` or `null`.
    pub vote: String,
}

/// Queue a vote for the party's next playlist update.
///
/// # Endpoint
///
/// ```text
/// GET /:auth_token/:party_id/:song_id/:vote
/// ```
///
/// # Errors
///
/// - 400 if `vote` is not `up`, `down` or `null`
/// - 404 if the party is not registered
/// - 401/502 if identity resolution against the social graph fails
pub async fn cast_vote<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<VotePath>,
    request_id: RequestId,
) -> WebResult<StatusCode> {
    let kind: VoteKind = path.vote.parse()?;

    let user_id = match state.voter_identity {
        VoterIdentity::Token => UserId::new(path.auth_token),
        VoterIdentity::Resolved => {
            let user = state.social.resolve_identity(&path.auth_token).await?;
            UserId::new(user.id)
        }
    };

    let party_id = PartyId::new(path.party_id);
    tracing::debug!(request_id = %request_id.0, %party_id, %kind, "Casting vote");

    state
        .parties
        .cast_vote(&party_id, SongId::new(path.song_id), user_id, kind)?;

    Ok(StatusCode::OK)
}
