//! Data Transfer Objects for API responses.
//!
//! Requests reuse the form types from [`crate::application::forms`]; these
//! DTOs shape what goes back over the wire.

pub mod health;
pub mod pitch;
