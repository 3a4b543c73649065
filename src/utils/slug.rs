//! URL slug derivation from pitch titles.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

/// Maximum slug length in bytes.
const MAX_SLUG_LEN: usize = 96;

/// Fallback for titles without any ASCII alphanumerics.
const FALLBACK_SLUG: &str = "pitch";

/// Converts a title to a lowercase, dash-separated slug.
///
/// Runs of anything other than ASCII letters and digits collapse into a
/// single `-`; leading and trailing dashes are dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let dashed = NON_ALPHANUMERIC.replace_all(&lower, "-");
    let mut slug = dashed.trim_matches('-').to_string();

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        slug = slug.trim_end_matches('-').to_string();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
