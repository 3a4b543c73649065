//! Pitch creation, lookup and search service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use validator::Validate;

use crate::application::forms::{PitchCreator, PitchDraft};
use crate::domain::entities::{AuthorId, NewPitch, Pitch};
use crate::domain::repositories::PitchRepository;
use crate::error::AppError;
use crate::utils::slug::slugify;

/// Service for storing and querying pitches.
///
/// Acts as the persistence collaborator of the submission form: it repeats
/// the draft validation, derives the slug and stores the record.
pub struct PitchService {
    repository: Arc<dyn PitchRepository>,
}

impl PitchService {
    pub fn new(repository: Arc<dyn PitchRepository>) -> Self {
        Self { repository }
    }

    /// Shared handle to the underlying repository.
    pub fn repository(&self) -> Arc<dyn PitchRepository> {
        self.repository.clone()
    }

    /// Validates and stores a draft, returning the stored pitch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the draft is invalid and
    /// [`AppError::Internal`] on storage errors.
    pub async fn create(&self, author: &AuthorId, draft: &PitchDraft) -> Result<Pitch, AppError> {
        draft.validate()?;

        let title = draft.title.trim().to_string();
        let new_pitch = NewPitch {
            slug: slugify(&title),
            title,
            description: draft.description.trim().to_string(),
            category: draft.category.trim().to_string(),
            image: draft.link.trim().to_string(),
            pitch: draft.pitch.clone(),
            author_id: author.as_str().to_string(),
        };

        self.repository.create(new_pitch).await
    }

    /// Retrieves a pitch by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pitch has this id.
    pub async fn get_pitch(&self, id: i64) -> Result<Pitch, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pitch not found", json!({ "id": id })))
    }

    /// Every pitch written by `author_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_by_author(&self, author_id: &str) -> Result<Vec<Pitch>, AppError> {
        self.repository.list_by_author(author_id).await
    }

    /// Searches title, category and author. A missing or blank query lists
    /// everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Pitch>, AppError> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        self.repository.search(query).await
    }

    /// Deletes a pitch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pitch has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Pitch not found", json!({ "id": id })))
        }
    }

    /// Number of stored pitches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[async_trait]
impl PitchCreator for PitchService {
    async fn create_pitch(&self, author: &AuthorId, draft: &PitchDraft) -> Result<i64, AppError> {
        self.create(author, draft).await.map(|pitch| pitch.id)
    }
}
