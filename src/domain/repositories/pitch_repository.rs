//! Repository trait for pitch data access.

use crate::domain::entities::{NewPitch, Pitch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and querying pitches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPitchRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PitchRepository: Send + Sync {
    /// Stores a new pitch and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_pitch: NewPitch) -> Result<Pitch, AppError>;

    /// Finds a pitch by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pitch>, AppError>;

    /// Lists every pitch written by `author_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Pitch>, AppError>;

    /// Lists pitches whose title, category or author contains `query`
    /// (case-insensitive), newest first. `None` lists everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, query: Option<String>) -> Result<Vec<Pitch>, AppError>;

    /// Adds one to the view counter.
    ///
    /// Returns `Ok(false)` if no pitch has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_views(&self, id: i64) -> Result<bool, AppError>;

    /// Removes a pitch. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored pitches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
