//! API route configuration.

use crate::api::handlers::{
    author_pitches_handler, create_pitch_handler, get_pitch_handler, search_pitches_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes, open to everyone.
///
/// # Endpoints
///
/// - `GET /pitches`                      - List or search pitches (`?query=`)
/// - `GET /pitches/{id}`                 - A single pitch
/// - `GET /authors/{author_id}/pitches`  - Every pitch of an author
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/pitches", get(search_pitches_handler))
        .route("/pitches/{id}", get(get_pitch_handler))
        .route("/authors/{author_id}/pitches", get(author_pitches_handler))
}

/// API routes requiring a session, see [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST /pitches` - Submit a pitch draft
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/pitches", post(create_pitch_handler))
}
