//! Route table.

use crate::error::AppError;
use crate::handlers::{discovery, health, party, vote};
use crate::middleware::with_request_tracing;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, routing::get, Router};
use partyline_social::SocialGraph;
use tower_http::cors::CorsLayer;

/// Default cap on request bodies (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the application router.
///
/// Static segments win over path parameters, so `/ping`, `/health` and
/// `/:auth_token/listParties` are never read as party routes.
pub fn build_router<G>(state: AppState<G>, max_body_bytes: usize) -> Router
where
    G: SocialGraph + 'static,
{
    let router = Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check::<G>))
        .route("/:auth_token/listParties", get(party::list_parties::<G>))
        .route("/:auth_token/getParties", get(discovery::get_parties::<G>))
        .route(
            "/:auth_token/:party_id/registerParty",
            get(party::register_party::<G>).post(party::register_party::<G>),
        )
        .route(
            "/:auth_token/:party_id/update",
            get(party::update_playlist::<G>).post(party::update_playlist::<G>),
        )
        .route(
            "/:auth_token/:party_id/getPlaylist",
            get(party::get_playlist::<G>),
        )
        .route(
            "/:auth_token/:party_id/getLibrary",
            get(party::get_library::<G>),
        )
        .route(
            "/:auth_token/:party_id/:song_id/:vote",
            get(vote::cast_vote::<G>),
        )
        .fallback(unknown_route)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state);

    with_request_tracing(router)
}

#[allow(clippy::unused_async)]
async fn unknown_route(uri: Uri) -> AppError {
    AppError::bad_request(format!("Unknown route {}", uri.path()))
}
