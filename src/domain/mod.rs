//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`view_event`] - Page view event model
//! - [`view_worker`] - Asynchronous view counting worker
//!
//! # View Counting Flow
//!
//! 1. The detail page handler renders a pitch
//! 2. A [`view_event::ViewEvent`] is pushed to a bounded channel (never blocking)
//! 3. [`view_worker::run_view_worker`] applies it with retry
//! 4. The counter is updated via [`repositories::PitchRepository::increment_views`]

pub mod entities;
pub mod repositories;
pub mod view_event;
pub mod view_worker;
