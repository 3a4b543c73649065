//! Form state and flows, independent of any rendering.
//!
//! - [`pitch_form`] - Pitch submission flow ([`PitchForm::submit`])
//! - [`search_form`] - Home page search and its reset control
//! - [`draft`] - [`PitchDraft`] and its validation schema
//! - [`result`] - [`SubmissionResult`] and [`FieldErrors`]
//! - [`effects`] - Notifications and navigations returned to the caller

pub mod draft;
pub mod effects;
pub mod pitch_form;
pub mod result;
pub mod search_form;

pub use draft::PitchDraft;
pub use effects::{Effect, Notification, Severity};
pub use pitch_form::{PitchCreator, PitchForm, Submission};
pub use result::{FieldErrors, SubmissionResult};
pub use search_form::SearchForm;

#[cfg(test)]
pub use pitch_form::MockPitchCreator;
