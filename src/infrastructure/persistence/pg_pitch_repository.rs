//! PostgreSQL implementation of the pitch repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPitch, Pitch};
use crate::domain::repositories::PitchRepository;
use crate::error::AppError;

const PITCH_COLUMNS: &str =
    "id, title, slug, description, category, image, pitch, author_id, views, created_at";

/// PostgreSQL repository for pitch storage and retrieval.
///
/// All queries are parameterized; search terms are additionally escaped for
/// `ILIKE`.
pub struct PgPitchRepository {
    pool: Arc<PgPool>,
}

impl PgPitchRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Escapes `ILIKE` wildcards and wraps the term for substring matching.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl PitchRepository for PgPitchRepository {
    async fn create(&self, new_pitch: NewPitch) -> Result<Pitch, AppError> {
        let sql = format!(
            "INSERT INTO pitches (title, slug, description, category, image, pitch, author_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PITCH_COLUMNS}"
        );

        let pitch = sqlx::query_as::<_, Pitch>(&sql)
            .bind(new_pitch.title)
            .bind(new_pitch.slug)
            .bind(new_pitch.description)
            .bind(new_pitch.category)
            .bind(new_pitch.image)
            .bind(new_pitch.pitch)
            .bind(new_pitch.author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(pitch)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pitch>, AppError> {
        let sql = format!("SELECT {PITCH_COLUMNS} FROM pitches WHERE id = $1");

        let pitch = sqlx::query_as::<_, Pitch>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(pitch)
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Pitch>, AppError> {
        let sql = format!(
            "SELECT {PITCH_COLUMNS} FROM pitches \
             WHERE author_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );

        let pitches = sqlx::query_as::<_, Pitch>(&sql)
            .bind(author_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(pitches)
    }

    async fn search(&self, query: Option<String>) -> Result<Vec<Pitch>, AppError> {
        let sql = format!(
            "SELECT {PITCH_COLUMNS} FROM pitches \
             WHERE $1::text IS NULL \
                OR title ILIKE $1 \
                OR category ILIKE $1 \
                OR author_id ILIKE $1 \
             ORDER BY created_at DESC, id DESC"
        );

        let pitches = sqlx::query_as::<_, Pitch>(&sql)
            .bind(query.as_deref().map(like_pattern))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(pitches)
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE pitches SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM pitches WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pitches")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
