//! Browser-facing layer.
//!
//! Server-rendered HTML pages for browsing, searching and submitting pitches.
//! Uses Askama templates.
//!
//! # Modules
//!
//! - [`error`] - HTML error pages
//! - [`flash`] - One-shot notifications across redirects
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session middleware
//! - [`routes`] - Page route configuration

pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod routes;
