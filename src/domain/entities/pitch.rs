//! Pitch entity representing a stored startup pitch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted startup pitch.
///
/// `image` holds the link submitted with the draft; `pitch` is the raw
/// markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Pitch {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub pitch: String,
    pub author_id: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

impl Pitch {
    /// Path of the detail page for this pitch.
    pub fn path(&self) -> String {
        detail_path(self.id)
    }
}

/// Path of the detail page for a pitch id.
pub fn detail_path(id: i64) -> String {
    format!("/startup/{id}")
}

/// Input data for creating a new pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPitch {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub pitch: String,
    pub author_id: String,
}
