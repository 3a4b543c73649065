//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod pitch_repository;

pub use pitch_repository::PitchRepository;

#[cfg(test)]
pub use pitch_repository::MockPitchRepository;
