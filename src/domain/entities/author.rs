//! Author identifier attached to every pitch.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

static AUTHOR_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]{3,32}$").expect("author id regex is valid"));

/// Opaque identifier of a pitch author.
///
/// Lowercase ASCII letters, digits, `_` and `-`, 3 to 32 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Parses and validates an author identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value does not match the allowed format.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if AUTHOR_ID_REGEX.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::bad_request(
                "Invalid author id",
                json!({ "reason": "Use 3-32 characters: a-z, 0-9, '_' or '-'" }),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_author_ids() {
        for id in ["ada", "grace_hopper", "user-42", "abc"] {
            assert_eq!(AuthorId::parse(id).unwrap().as_str(), id);
        }
    }

    #[test]
    fn test_invalid_author_ids() {
        for id in ["", "ab", "Ada", "has space", "semi;colon", &"x".repeat(33)] {
            assert!(AuthorId::parse(id).is_err(), "{id} should be rejected");
        }
    }
}
