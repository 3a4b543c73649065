//! Home page: search and listing of all pitches.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::forms::{Effect, Notification, SearchForm, search_form::HOME_PATH};
use crate::application::pitch_list::PitchList;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::flash;
use crate::web::middleware::web_auth::current_author;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub query: Option<String>,
    pub show_reset: bool,
    pub pitches: PitchList,
    pub session: Option<String>,
    pub toast: Option<Notification>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /?query=fintech`
///
/// Without a query every pitch is listed, newest first. With a query only
/// pitches whose title, category or author match are shown and the reset
/// control is offered.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let pitches = state.pitch_service.search(form.term()).await?;
    let (toast, flash_headers) =
        flash::take(&headers, state.session_service.secure_cookies());

    let page = HomeTemplate {
        query: form.term().map(str::to_string),
        show_reset: form.is_active(),
        pitches: PitchList::from(pitches),
        session: current_author(&state, &headers).map(|a| a.to_string()),
        toast,
    };

    Ok((flash_headers, page).into_response())
}

/// Clears the search form and navigates home.
///
/// # Endpoint
///
/// `GET /search/reset`
pub async fn reset_handler(Query(mut form): Query<SearchForm>) -> Redirect {
    match form.reset() {
        Effect::Navigate(path) => Redirect::to(&path),
        Effect::Notify(_) => Redirect::to(HOME_PATH),
    }
}
