//! Author page listing the author's pitches.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
};

use crate::application::forms::Notification;
use crate::application::pitch_list::PitchList;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::middleware::web_auth::current_author;

#[derive(Template, WebTemplate)]
#[template(path = "user.html")]
pub struct UserTemplate {
    pub author_id: String,
    pub is_self: bool,
    pub pitches: PitchList,
    pub session: Option<String>,
    pub toast: Option<Notification>,
}

/// Renders every pitch written by an author.
///
/// # Endpoint
///
/// `GET /user/{id}`
///
/// Shows "No posts yet" when the author has none.
pub async fn user_handler(
    Path(author_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<UserTemplate, WebError> {
    let pitches = state.pitch_service.list_by_author(&author_id).await?;
    let session = current_author(&state, &headers).map(|a| a.to_string());

    Ok(UserTemplate {
        is_self: session.as_deref() == Some(author_id.as_str()),
        author_id,
        pitches: PitchList::from(pitches),
        session,
        toast: None,
    })
}
