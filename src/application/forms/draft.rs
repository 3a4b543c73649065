//! Pitch draft and its validation schema.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;
use validator::{Validate, ValidationError};

/// Field values of one submission attempt.
///
/// Missing form fields deserialize as empty strings so that they surface as
/// validation errors instead of extractor rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PitchDraft {
    #[validate(
        custom(function = "not_blank", message = "Title is required"),
        length(max = 100, message = "Title must be at most 100 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "not_blank", message = "Description is required"),
        length(max = 500, message = "Description must be at most 500 characters")
    )]
    pub description: String,

    #[validate(
        custom(function = "not_blank", message = "Category is required"),
        length(max = 40, message = "Category must be at most 40 characters")
    )]
    pub category: String,

    /// Image link shown on the pitch card.
    #[validate(custom(function = "http_url"))]
    pub link: String,

    /// Markdown body.
    #[validate(
        custom(function = "not_blank", message = "Pitch is required"),
        length(max = 20000, message = "Pitch must be at most 20000 characters")
    )]
    pub pitch: String,
}

impl PitchDraft {
    /// Names of every validated field, in form order.
    pub const FIELDS: [&'static str; 5] = ["title", "description", "category", "link", "pitch"];

    /// Returns true when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.category.is_empty()
            && self.link.is_empty()
            && self.pitch.is_empty()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Image URL is required")));
    }

    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("url")
            .with_message(Cow::Borrowed("Enter a valid http(s) image URL")))
    }
}
