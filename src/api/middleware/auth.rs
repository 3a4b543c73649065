//! Session authentication middleware for API write endpoints.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::application::services::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::get_cookie;

/// Requires a valid `session` cookie and exposes the author to handlers.
///
/// On success the [`crate::domain::entities::AuthorId`] is inserted into the
/// request extensions, so handlers can take `Extension<AuthorId>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the cookie is missing or its signature is
/// invalid.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let author = get_cookie(req.headers(), SESSION_COOKIE)
        .and_then(|value| st.session_service.verify(&value))
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session cookie is missing or invalid" }),
            )
        })?;

    req.extensions_mut().insert(author);
    Ok(next.run(req).await)
}
