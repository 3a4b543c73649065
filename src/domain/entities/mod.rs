//! Core domain entities.
//!
//! - [`Pitch`] - A stored startup pitch
//! - [`NewPitch`] - Input for creating a pitch
//! - [`AuthorId`] - Validated author identifier

pub mod author;
pub mod pitch;

pub use author::AuthorId;
pub use pitch::{NewPitch, Pitch, detail_path};
