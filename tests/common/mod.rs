#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware};
use chrono::Utc;
use pitchboard::api;
use pitchboard::api::middleware::auth;
use pitchboard::application::services::{PitchService, SessionService};
use pitchboard::domain::entities::{AuthorId, NewPitch, Pitch};
use pitchboard::domain::repositories::PitchRepository;
use pitchboard::domain::view_event::ViewEvent;
use pitchboard::error::AppError;
use pitchboard::state::AppState;
use pitchboard::web;
use pitchboard::web::middleware::web_auth;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const SUCCESS_MESSAGE: &str = "Your startup pitch has been created successfully";

/// Pitch storage kept in memory, with a switch that makes every call fail.
#[derive(Default)]
pub struct InMemoryPitchRepository {
    pitches: Mutex<Vec<Pitch>>,
    failing: AtomicBool,
}

impl InMemoryPitchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.pitches.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }

    fn newest_first(mut pitches: Vec<Pitch>) -> Vec<Pitch> {
        pitches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        pitches
    }
}

#[async_trait]
impl PitchRepository for InMemoryPitchRepository {
    async fn create(&self, new_pitch: NewPitch) -> Result<Pitch, AppError> {
        self.check()?;
        let mut pitches = self.pitches.lock().unwrap();
        let pitch = Pitch {
            id: pitches.len() as i64 + 1,
            title: new_pitch.title,
            slug: new_pitch.slug,
            description: new_pitch.description,
            category: new_pitch.category,
            image: new_pitch.image,
            pitch: new_pitch.pitch,
            author_id: new_pitch.author_id,
            views: 0,
            created_at: Utc::now(),
        };
        pitches.push(pitch.clone());
        Ok(pitch)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pitch>, AppError> {
        self.check()?;
        let pitches = self.pitches.lock().unwrap();
        Ok(pitches.iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Pitch>, AppError> {
        self.check()?;
        let pitches = self.pitches.lock().unwrap();
        Ok(Self::newest_first(
            pitches
                .iter()
                .filter(|p| p.author_id == author_id)
                .cloned()
                .collect(),
        ))
    }

    async fn search(&self, query: Option<String>) -> Result<Vec<Pitch>, AppError> {
        self.check()?;
        let pitches = self.pitches.lock().unwrap();
        let needle = query.map(|q| q.to_lowercase());
        Ok(Self::newest_first(
            pitches
                .iter()
                .filter(|p| match &needle {
                    None => true,
                    Some(n) => [&p.title, &p.category, &p.author_id]
                        .iter()
                        .any(|field| field.to_lowercase().contains(n)),
                })
                .cloned()
                .collect(),
        ))
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut pitches = self.pitches.lock().unwrap();
        match pitches.iter_mut().find(|p| p.id == id) {
            Some(pitch) => {
                pitch.views += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut pitches = self.pitches.lock().unwrap();
        let before = pitches.len();
        pitches.retain(|p| p.id != id);
        Ok(pitches.len() != before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.pitches.lock().unwrap().len() as i64)
    }
}

pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ViewEvent>,
    Arc<InMemoryPitchRepository>,
) {
    create_test_state_with_cookies(false)
}

/// Same as [`create_test_state`], with `Secure` cookies when `secure` is set.
pub fn create_test_state_with_cookies(
    secure: bool,
) -> (
    AppState,
    mpsc::Receiver<ViewEvent>,
    Arc<InMemoryPitchRepository>,
) {
    let repository = Arc::new(InMemoryPitchRepository::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        Arc::new(PitchService::new(repository.clone())),
        Arc::new(SessionService::new(TEST_SECRET.to_string(), secure)),
        tx,
        SUCCESS_MESSAGE,
    );

    (state, rx, repository)
}

pub async fn create_test_pitch(
    repository: &InMemoryPitchRepository,
    author: &str,
    title: &str,
    category: &str,
) -> Pitch {
    repository
        .create(NewPitch {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: format!("About {title}"),
            category: category.to_string(),
            image: "https://example.com/cover.png".to_string(),
            pitch: "## Problem\n\nIt is **hard**.".to_string(),
            author_id: author.to_string(),
        })
        .await
        .unwrap()
}

/// `Cookie` header value carrying a valid session for `author`.
pub fn session_cookie(state: &AppState, author: &str) -> String {
    let author = AuthorId::parse(author).unwrap();
    format!("session={}", state.session_service.sign(&author))
}

/// Page routes as mounted by the server, without rate limiting.
pub fn web_app(state: AppState) -> Router {
    let protected = web::routes::protected_routes()
        .merge(web::routes::submit_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));

    Router::new()
        .merge(protected)
        .merge(web::routes::session_routes())
        .merge(web::routes::public_routes())
        .with_state(state)
}

/// API routes as mounted by the server, without rate limiting.
pub fn api_app(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected);

    Router::new().nest("/api", api_router).with_state(state)
}
