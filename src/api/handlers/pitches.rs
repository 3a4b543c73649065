//! Handlers for pitch endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::api::dto::pitch::PitchResponse;
use crate::application::forms::{PitchDraft, SearchForm, SubmissionResult};
use crate::domain::entities::AuthorId;
use crate::error::AppError;
use crate::state::AppState;

/// Lists pitches, optionally filtered by a search term.
///
/// # Endpoint
///
/// `GET /api/pitches?query=fintech`
///
/// An empty or missing `query` lists every pitch, newest first.
pub async fn search_pitches_handler(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Json<Vec<PitchResponse>>, AppError> {
    let pitches = state.pitch_service.search(form.term()).await?;

    Ok(Json(pitches.into_iter().map(PitchResponse::from).collect()))
}

/// Returns a single pitch.
///
/// # Endpoint
///
/// `GET /api/pitches/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the pitch doesn't exist.
pub async fn get_pitch_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PitchResponse>, AppError> {
    let pitch = state.pitch_service.get_pitch(id).await?;

    Ok(Json(pitch.into()))
}

/// Lists every pitch of an author, newest first.
///
/// # Endpoint
///
/// `GET /api/authors/{author_id}/pitches`
///
/// Unknown authors simply have no pitches.
pub async fn author_pitches_handler(
    Path(author_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PitchResponse>>, AppError> {
    let pitches = state.pitch_service.list_by_author(&author_id).await?;

    Ok(Json(pitches.into_iter().map(PitchResponse::from).collect()))
}

/// Submits a pitch draft on behalf of the signed-in author.
///
/// # Endpoint
///
/// `POST /api/pitches`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Solar Drones",
///   "description": "Drones that charge in flight",
///   "category": "Energy",
///   "link": "https://example.com/drone.png",
///   "pitch": "## Problem\n..."
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: `{ "status": "SUCCESS", "id": 42 }` with a `Location` header
/// - **400 Bad Request**: `{ "status": "ERROR", "message": "Validation failed", "field_errors": {...} }`
/// - **500 Internal Server Error**: `{ "status": "ERROR", "message": "An unexpected error occurred", "field_errors": {} }`
pub async fn create_pitch_handler(
    State(state): State<AppState>,
    Extension(author): Extension<AuthorId>,
    Json(draft): Json<PitchDraft>,
) -> Response {
    let mut form = state.new_pitch_form();
    let submission = form
        .submit(draft, &author, state.pitch_service.as_ref())
        .await;

    let location = submission.navigation().map(str::to_string);

    match submission.result {
        SubmissionResult::Success { .. } => {
            let mut response = (StatusCode::CREATED, Json(submission.result)).into_response();
            if let Some(location) = location
                && let Ok(value) = location.parse()
            {
                response.headers_mut().insert(LOCATION, value);
            }
            response
        }
        SubmissionResult::Error {
            ref field_errors, ..
        } => {
            let status = if field_errors.is_empty() {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(submission.result)).into_response()
        }
        SubmissionResult::Initial => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(submission.result)).into_response()
        }
    }
}
