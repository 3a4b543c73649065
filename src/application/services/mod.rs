//! Business logic services for the application layer.

pub mod pitch_service;
pub mod session_service;

pub use pitch_service::PitchService;
pub use session_service::{SESSION_COOKIE, SessionService};
