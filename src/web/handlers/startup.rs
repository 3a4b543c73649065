//! Pitch detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::application::forms::Notification;
use crate::domain::entities::Pitch;
use crate::state::AppState;
use crate::utils::markdown;
use crate::web::error::WebError;
use crate::web::flash;
use crate::web::middleware::web_auth::current_author;

#[derive(Template, WebTemplate)]
#[template(path = "startup.html")]
pub struct StartupTemplate {
    pub pitch: Pitch,
    /// Markdown body rendered to HTML (raw HTML escaped).
    pub body_html: String,
    pub date: String,
    pub session: Option<String>,
    pub toast: Option<Notification>,
}

/// Renders a pitch and queues a view.
///
/// # Endpoint
///
/// `GET /startup/{id}`
///
/// Shows the toast left in the `flash` cookie by the submission redirect.
///
/// # Errors
///
/// Renders a 404 page if the pitch doesn't exist.
pub async fn startup_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let pitch = state.pitch_service.get_pitch(id).await?;
    let (toast, flash_headers) =
        flash::take(&headers, state.session_service.secure_cookies());

    let page = StartupTemplate {
        body_html: markdown::render(&pitch.pitch),
        date: pitch.created_at.format("%B %-d, %Y").to_string(),
        session: current_author(&state, &headers).map(|a| a.to_string()),
        toast,
        pitch,
    };

    state.record_view(id);

    Ok((flash_headers, page).into_response())
}
