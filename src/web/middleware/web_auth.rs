//! Cookie-based session middleware for browser routes.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::application::services::SESSION_COOKIE;
use crate::domain::entities::AuthorId;
use crate::state::AppState;
use crate::utils::cookies::get_cookie;

/// Path of the sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Author of the request's session cookie, if it carries a valid signature.
pub fn current_author(state: &AppState, headers: &HeaderMap) -> Option<AuthorId> {
    get_cookie(headers, SESSION_COOKIE).and_then(|value| state.session_service.verify(&value))
}

/// Requires a signed-in author for pages that create content.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<author>.<signature>
/// ```
///
/// On success the [`AuthorId`] is inserted into the request extensions.
///
/// # Errors
///
/// Redirects to `/login` if the cookie is missing or its signature is invalid.
/// Unlike the API middleware, which answers `401 Unauthorized`, browsers get
/// sent to the sign-in page.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    match current_author(&st, req.headers()) {
        Some(author) => {
            req.extensions_mut().insert(author);
            Ok(next.run(req).await)
        }
        None => Err(Redirect::to(LOGIN_PATH)),
    }
}
