//! HTTP middleware for request processing and protection.
//!
//! - [`auth`] - Session cookie authentication for API writes
//! - [`rate_limit`] - Per-IP token bucket limits
//! - [`tracing`] - Request/response logging

pub mod auth;
pub mod rate_limit;
pub mod tracing;
