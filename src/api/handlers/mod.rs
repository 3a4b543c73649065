//! HTTP request handlers for API endpoints.

pub mod health;
pub mod pitches;

pub use health::health_handler;
pub use pitches::{
    author_pitches_handler, create_pitch_handler, get_pitch_handler, search_pitches_handler,
};
