//! Sign-in and sign-out.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::forms::Notification;
use crate::application::forms::search_form::HOME_PATH;
use crate::domain::entities::AuthorId;
use crate::state::AppState;
use crate::web::flash;
use crate::web::middleware::web_auth::current_author;

/// Template for the sign-in page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
    pub session: Option<String>,
    pub toast: Option<Notification>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
}

/// Renders the sign-in page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(State(state): State<AppState>, headers: HeaderMap) -> LoginTemplate {
    LoginTemplate {
        username: String::new(),
        error: None,
        session: current_author(&state, &headers).map(|a| a.to_string()),
        toast: None,
    }
}

/// Starts a session for the given username.
///
/// # Endpoint
///
/// `POST /login` (form-urlencoded `username`)
///
/// Sets the signed `session` cookie and redirects home. An invalid username
/// re-renders the page with `422 Unprocessable Entity`.
pub async fn login_handler(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let username = form.username.trim().to_lowercase();

    let author = match AuthorId::parse(&username) {
        Ok(author) => author,
        Err(e) => {
            let info = e.to_error_info();
            let reason = info.details["reason"].as_str().unwrap_or(info.message.as_str());
            let page = LoginTemplate {
                error: Some(reason.to_string()),
                username: form.username,
                session: None,
                toast: None,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, page).into_response();
        }
    };

    tracing::info!(author = %author, "Author signed in");

    let mut headers = HeaderMap::new();
    if let Ok(cookie) = HeaderValue::from_str(&state.session_service.session_cookie(&author)) {
        headers.append(SET_COOKIE, cookie);
    }
    let signed_in = Notification::success(format!("Signed in as {author}"));
    if let Some(cookie) = flash::set_cookie(&signed_in, state.session_service.secure_cookies()) {
        headers.append(SET_COOKIE, cookie);
    }

    (headers, Redirect::to(HOME_PATH)).into_response()
}

/// Ends the session.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    let mut headers = HeaderMap::new();
    if let Ok(cookie) = HeaderValue::from_str(&state.session_service.clear_cookie()) {
        headers.append(SET_COOKIE, cookie);
    }

    (headers, Redirect::to(HOME_PATH)).into_response()
}
