//! Application layer: form flows, view models and services.
//!
//! This layer orchestrates domain operations and holds the form logic the
//! HTTP layers drive. Nothing here renders HTML or touches HTTP types.
//!
//! - [`forms`] - Pitch submission and search forms
//! - [`pitch_list`] - Card list view model with its empty state
//! - [`services::PitchService`] - Pitch storage, lookup and search
//! - [`services::SessionService`] - Signed author sessions

pub mod forms;
pub mod pitch_list;
pub mod services;
