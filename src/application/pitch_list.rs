//! Card list rendered for a set of pitches.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Pitch;

/// Message rendered when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No posts yet";

/// One card in a pitch listing, keyed by the pitch id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchCard {
    pub key: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub author_id: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub href: String,
}

impl From<Pitch> for PitchCard {
    fn from(pitch: Pitch) -> Self {
        let href = pitch.path();
        Self {
            key: pitch.id,
            title: pitch.title,
            description: pitch.description,
            category: pitch.category,
            image: pitch.image,
            author_id: pitch.author_id,
            views: pitch.views,
            created_at: pitch.created_at,
            href,
        }
    }
}

impl PitchCard {
    /// Creation date formatted for cards.
    pub fn date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// Either the empty-state indicator or one card per pitch, in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchList {
    Empty,
    Cards(Vec<PitchCard>),
}

impl From<Vec<Pitch>> for PitchList {
    fn from(pitches: Vec<Pitch>) -> Self {
        if pitches.is_empty() {
            Self::Empty
        } else {
            Self::Cards(pitches.into_iter().map(PitchCard::from).collect())
        }
    }
}

impl PitchList {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn empty_message(&self) -> &'static str {
        EMPTY_MESSAGE
    }

    pub fn cards(&self) -> &[PitchCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }
}
