//! DTOs for pitch endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Pitch;

/// JSON representation of a stored pitch.
#[derive(Debug, Serialize)]
pub struct PitchResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Raw markdown body.
    pub pitch: String,
    pub author_id: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    /// Path of the HTML detail page.
    pub url: String,
}

impl From<Pitch> for PitchResponse {
    fn from(pitch: Pitch) -> Self {
        let url = pitch.path();
        Self {
            id: pitch.id,
            title: pitch.title,
            slug: pitch.slug,
            description: pitch.description,
            category: pitch.category,
            image: pitch.image,
            pitch: pitch.pitch,
            author_id: pitch.author_id,
            views: pitch.views,
            created_at: pitch.created_at,
            url,
        }
    }
}
