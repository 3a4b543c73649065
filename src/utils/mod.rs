//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug derivation from pitch titles
//! - [`markdown`] - Safe markdown rendering
//! - [`cookies`] - Cookie header parsing

pub mod cookies;
pub mod markdown;
pub mod slug;
