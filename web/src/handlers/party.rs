//! Party lifecycle and playback client endpoints.

use super::{PartyPath, TokenPath};
use crate::WebResult;
use crate::extractors::RequestId;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use partyline_core::{Event, PartyId, Registration};
use partyline_social::SocialGraph;

/// Register a party, replacing any party with the same id.
///
/// The request body is stored verbatim as the party library.
///
/// # Endpoint
///
/// ```text
/// GET|POST /:auth_token/:party_id/registerParty
/// ```
///
/// Answers `201 Created` for a new party and `200 OK` for a replacement.
#[allow(clippy::unused_async)]
pub async fn register_party<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<PartyPath>,
    request_id: RequestId,
    library: Bytes,
) -> StatusCode {
    let party_id = PartyId::new(path.party_id);
    tracing::debug!(request_id = %request_id.0, %party_id, "Registering party");

    match state.parties.register_party(party_id, library) {
        Registration::Created => StatusCode::CREATED,
        Registration::Replaced => StatusCode::OK,
    }
}

/// Store the playback client's playlist and hand back pending votes.
///
/// # Endpoint
///
/// ```text
/// GET|POST /:auth_token/:party_id/update
/// ```
///
/// # Response
///
/// ```json
/// [{"Type": 1, "UserId": "u1", "SongId": "s1"}]
/// ```
///
/// # Errors
///
/// 404 if the party is not registered.
#[allow(clippy::unused_async)]
pub async fn update_playlist<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<PartyPath>,
    playlist: Bytes,
) -> WebResult<Json<Vec<Event>>> {
    let events = state
        .parties
        .set_playlist(&PartyId::new(path.party_id), playlist)?;
    Ok(Json(events))
}

/// Current playlist blob, empty until the first update.
///
/// # Errors
///
/// 404 if the party is not registered.
#[allow(clippy::unused_async)]
pub async fn get_playlist<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<PartyPath>,
) -> WebResult<Bytes> {
    Ok(state.parties.get_playlist(&PartyId::new(path.party_id))?)
}

/// Library blob supplied at registration.
///
/// # Errors
///
/// 404 if the party is not registered.
#[allow(clippy::unused_async)]
pub async fn get_library<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(path): Path<PartyPath>,
) -> WebResult<Bytes> {
    Ok(state.parties.get_library(&PartyId::new(path.party_id))?)
}

/// Ids of every registered party, sorted.
///
/// # Endpoint
///
/// ```text
/// GET /:auth_token/listParties
/// ```
#[allow(clippy::unused_async)]
pub async fn list_parties<G: SocialGraph>(
    State(state): State<AppState<G>>,
    Path(_path): Path<TokenPath>,
) -> Json<Vec<PartyId>> {
    let mut ids = state.parties.list_party_ids();
    ids.sort_unstable();
    Json(ids)
}
