//! Search form shown on the home page.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use super::effects::Effect;

/// Path of the home view.
pub const HOME_PATH: &str = "/";

/// Query string of the home page search form.
///
/// An empty `query=` parameter is treated the same as no parameter.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchForm {
    pub fn new(query: Option<String>) -> Self {
        Self { query }
    }

    /// The trimmed search term, if any.
    pub fn term(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Whether the reset control should be offered.
    pub fn is_active(&self) -> bool {
        self.term().is_some()
    }

    /// Clears every field and returns the navigation to the home view.
    ///
    /// Calling it on an already empty form only yields the navigation.
    pub fn reset(&mut self) -> Effect {
        self.query = None;
        Effect::Navigate(HOME_PATH.to_string())
    }
}
