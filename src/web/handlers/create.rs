//! Pitch submission page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};

use crate::application::forms::{
    Effect, FieldErrors, Notification, PitchDraft, PitchForm, SubmissionResult,
};
use crate::domain::entities::AuthorId;
use crate::state::AppState;
use crate::web::flash;

/// Template for the submission form.
///
/// Renders `templates/create.html`; every input is pre-filled from `values`
/// and annotated with `errors`, so a failed attempt loses nothing.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub values: PitchDraft,
    pub errors: FieldErrors,
    pub pending: bool,
    pub session: Option<String>,
    pub toast: Option<Notification>,
}

impl CreateTemplate {
    fn from_form(form: &PitchForm, author: &AuthorId, toast: Option<Notification>) -> Self {
        Self {
            values: form.values().clone(),
            errors: form.errors().clone(),
            pending: form.is_pending(),
            session: Some(author.to_string()),
            toast,
        }
    }
}

/// Renders an empty submission form.
///
/// # Endpoint
///
/// `GET /startup/create` (session required)
pub async fn create_form_handler(
    State(state): State<AppState>,
    Extension(author): Extension<AuthorId>,
) -> CreateTemplate {
    CreateTemplate::from_form(&state.new_pitch_form(), &author, None)
}

/// Handles a form submission.
///
/// # Endpoint
///
/// `POST /startup/create` (session required, form-urlencoded body)
///
/// # Responses
///
/// - **303 See Other** to `/startup/{id}` on success, with the success toast
///   in the `flash` cookie of the same response
/// - **422 Unprocessable Entity** with the form re-rendered, values kept and
///   failing fields annotated, when validation fails
/// - **500 Internal Server Error** with the form re-rendered and values kept
///   when storing fails
pub async fn submit_handler(
    State(state): State<AppState>,
    Extension(author): Extension<AuthorId>,
    Form(draft): Form<PitchDraft>,
) -> Response {
    let mut form = state.new_pitch_form();
    let submission = form
        .submit(draft, &author, state.pitch_service.as_ref())
        .await;

    let mut headers = HeaderMap::new();
    let mut toast = None;

    for effect in submission.effects {
        match effect {
            Effect::Notify(notification) => toast = Some(notification),
            Effect::Navigate(path) => {
                let secure = state.session_service.secure_cookies();
                if let Some(cookie) = toast
                    .take()
                    .and_then(|toast| flash::set_cookie(&toast, secure))
                {
                    headers.append(SET_COOKIE, cookie);
                }
                return (headers, Redirect::to(&path)).into_response();
            }
        }
    }

    let status = match &submission.result {
        SubmissionResult::Error { field_errors, .. } if !field_errors.is_empty() => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmissionResult::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        SubmissionResult::Initial | SubmissionResult::Success { .. } => StatusCode::OK,
    };

    (status, CreateTemplate::from_form(&form, &author, toast)).into_response()
}
