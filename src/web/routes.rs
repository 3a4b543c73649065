//! Browser route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_form_handler, home_handler, login_handler, login_page_handler, logout_handler,
    reset_handler, startup_handler, submit_handler, user_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Pages that require a signed-in author.
///
/// Protected via [`crate::web::middleware::web_auth`]; anonymous visitors are
/// redirected to `/login`.
///
/// # Endpoints
///
/// - `GET /startup/create` - Submission form
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/startup/create", get(create_form_handler))
}

/// Form submissions, kept apart from [`protected_routes`] so only writes are
/// rate limited. Same session requirement.
///
/// # Endpoints
///
/// - `POST /startup/create` - Submit a pitch
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/startup/create", post(submit_handler))
}

/// Session management endpoints.
///
/// # Endpoints
///
/// - `POST /login` - Start a session
/// - `POST /logout` - End the session
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Home with search and listing
/// - `GET /search/reset` - Clear the search and go home
/// - `GET /startup/{id}` - Pitch detail
/// - `GET /user/{id}` - Pitches of one author
/// - `GET /login` - Sign-in page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/search/reset", get(reset_handler))
        .route("/startup/{id}", get(startup_handler))
        .route("/user/{id}", get(user_handler))
        .route("/login", get(login_page_handler))
}
