//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgPitchRepository`] - Pitch storage, search and view counters

pub mod pg_pitch_repository;

pub use pg_pitch_repository::PgPitchRepository;
