//! Pitch submission form: local validation, a single persistence call, and
//! reconciliation of the form state with the outcome.

use async_trait::async_trait;
use validator::Validate;

use super::draft::PitchDraft;
use super::effects::{Effect, Notification};
use super::result::{FieldErrors, SubmissionResult};
use crate::domain::entities::{AuthorId, detail_path};
use crate::error::AppError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const CHECK_INPUTS: &str = "Please check your inputs and try again";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Your startup pitch has been created successfully";

/// Persistence collaborator invoked once per locally valid submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PitchCreator: Send + Sync {
    /// Stores the draft on behalf of `author` and returns the new pitch id.
    async fn create_pitch(&self, author: &AuthorId, draft: &PitchDraft) -> Result<i64, AppError>;
}

/// Result of [`PitchForm::submit`] together with the effects the caller must
/// apply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub result: SubmissionResult,
    pub effects: Vec<Effect>,
}

impl Submission {
    /// The notification issued for this attempt.
    pub fn notification(&self) -> Option<&Notification> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification),
            Effect::Navigate(_) => None,
        })
    }

    /// The navigation target, present only on success.
    pub fn navigation(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Navigate(path) => Some(path.as_str()),
            Effect::Notify(_) => None,
        })
    }
}

/// State of the pitch submission form.
///
/// Holds what the page needs to render: the current field values (kept after a
/// failed attempt so nothing typed is lost), field-level errors, the pending
/// flag and the last outcome.
#[derive(Debug, Clone)]
pub struct PitchForm {
    values: PitchDraft,
    errors: FieldErrors,
    pending: bool,
    result: SubmissionResult,
    success_message: String,
}

impl Default for PitchForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_MESSAGE)
    }
}

impl PitchForm {
    pub fn new(success_message: impl Into<String>) -> Self {
        Self {
            values: PitchDraft::default(),
            errors: FieldErrors::new(),
            pending: false,
            result: SubmissionResult::Initial,
            success_message: success_message.into(),
        }
    }

    pub fn values(&self) -> &PitchDraft {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    /// Validates `draft` and, if valid, persists it through `creator`.
    ///
    /// The creator is called at most once, and never for a draft that failed
    /// local validation. On success the field values are cleared and the
    /// effects are a success notification followed by navigation to the new
    /// pitch. On any failure the values are kept and a single error
    /// notification is returned.
    pub async fn submit<C>(&mut self, draft: PitchDraft, author: &AuthorId, creator: &C) -> Submission
    where
        C: PitchCreator + ?Sized,
    {
        self.pending = true;
        self.values = draft;

        let submission = match self.values.validate() {
            Err(errors) => {
                let field_errors = FieldErrors::from(&errors);
                tracing::debug!(
                    fields = ?field_errors.fields().collect::<Vec<_>>(),
                    "Pitch draft failed validation"
                );
                metrics::counter!("pitch_submissions_total", "outcome" => "invalid").increment(1);

                self.errors = field_errors.clone();
                Submission {
                    result: SubmissionResult::Error {
                        message: VALIDATION_FAILED.to_string(),
                        field_errors,
                    },
                    effects: vec![Effect::Notify(Notification::error(CHECK_INPUTS))],
                }
            }
            Ok(()) => {
                self.errors = FieldErrors::new();

                match creator.create_pitch(author, &self.values).await {
                    Ok(id) => {
                        tracing::info!(pitch_id = id, author = %author, "Pitch created");
                        metrics::counter!("pitch_submissions_total", "outcome" => "success")
                            .increment(1);

                        self.values = PitchDraft::default();
                        Submission {
                            result: SubmissionResult::Success { id },
                            effects: vec![
                                Effect::Notify(Notification::success(self.success_message.clone())),
                                Effect::Navigate(detail_path(id)),
                            ],
                        }
                    }
                    Err(e) => {
                        tracing::warn!(author = %author, error = ?e, "Pitch submission failed");
                        metrics::counter!("pitch_submissions_total", "outcome" => "failed")
                            .increment(1);

                        Submission {
                            result: SubmissionResult::Error {
                                message: UNEXPECTED_ERROR.to_string(),
                                field_errors: FieldErrors::new(),
                            },
                            effects: vec![Effect::Notify(Notification::error(UNEXPECTED_ERROR))],
                        }
                    }
                }
            }
        };

        self.result = submission.result.clone();
        self.pending = false;
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::effects::Severity;
    use serde_json::json;

    fn author() -> AuthorId {
        AuthorId::parse("ada").unwrap()
    }

    fn draft(title: &str, description: &str, category: &str, link: &str, pitch: &str) -> PitchDraft {
        PitchDraft {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            link: link.to_string(),
            pitch: pitch.to_string(),
        }
    }

    fn valid_draft() -> PitchDraft {
        draft("T", "D", "C", "https://x.com", "P")
    }

    fn creator_never_called() -> MockPitchCreator {
        let mut creator = MockPitchCreator::new();
        creator.expect_create_pitch().times(0);
        creator
    }

    #[tokio::test]
    async fn test_empty_title_fails_without_persistence() {
        let creator = creator_never_called();
        let mut form = PitchForm::default();

        let input = draft("", "d", "c", "https://x.com", "p");
        let submission = form.submit(input.clone(), &author(), &creator).await;

        match &submission.result {
            SubmissionResult::Error {
                message,
                field_errors,
            } => {
                assert_eq!(message, VALIDATION_FAILED);
                assert!(field_errors.contains("title"));
                assert_eq!(field_errors.len(), 1);
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert_eq!(form.values(), &input);
        assert!(submission.navigation().is_none());
    }

    #[tokio::test]
    async fn test_malformed_link_fails_without_persistence() {
        let creator = creator_never_called();
        let mut form = PitchForm::default();

        let submission = form
            .submit(draft("T", "D", "C", "not-a-url", "P"), &author(), &creator)
            .await;

        let SubmissionResult::Error { field_errors, .. } = &submission.result else {
            panic!("expected error");
        };
        assert!(field_errors.contains("link"));
        assert!(!field_errors.contains("title"));
        assert!(form.errors().contains("link"));
    }

    #[tokio::test]
    async fn test_each_missing_field_is_reported() {
        for field in PitchDraft::FIELDS {
            let mut input = valid_draft();
            match field {
                "title" => input.title.clear(),
                "description" => input.description.clear(),
                "category" => input.category.clear(),
                "link" => input.link.clear(),
                "pitch" => input.pitch.clear(),
                _ => unreachable!(),
            }

            let creator = creator_never_called();
            let mut form = PitchForm::default();
            let submission = form.submit(input, &author(), &creator).await;

            let SubmissionResult::Error { field_errors, .. } = submission.result else {
                panic!("expected error for {field}");
            };
            assert_eq!(field_errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[tokio::test]
    async fn test_validation_failure_notifies_once() {
        let creator = creator_never_called();
        let mut form = PitchForm::default();

        let submission = form
            .submit(PitchDraft::default(), &author(), &creator)
            .await;

        assert_eq!(submission.effects.len(), 1);
        let notification = submission.notification().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.description, CHECK_INPUTS);
        assert_eq!(form.errors().len(), PitchDraft::FIELDS.len());
    }

    #[tokio::test]
    async fn test_valid_draft_persists_exactly_once() {
        let mut creator = MockPitchCreator::new();
        creator
            .expect_create_pitch()
            .withf(|author, draft| author.as_str() == "ada" && draft.title == "T")
            .times(1)
            .returning(|_, _| Ok(7));

        let mut form = PitchForm::default();
        let submission = form.submit(valid_draft(), &author(), &creator).await;

        assert!(submission.result.is_success());
    }

    #[tokio::test]
    async fn test_success_clears_draft_and_navigates_after_notifying() {
        let mut creator = MockPitchCreator::new();
        creator
            .expect_create_pitch()
            .times(1)
            .returning(|_, _| Ok(123));

        let mut form = PitchForm::new("Pitch published");
        let submission = form.submit(valid_draft(), &author(), &creator).await;

        assert_eq!(submission.result, SubmissionResult::Success { id: 123 });
        assert_eq!(form.result(), &SubmissionResult::Success { id: 123 });
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_pending());

        assert_eq!(
            submission.effects,
            vec![
                Effect::Notify(Notification::success("Pitch published")),
                Effect::Navigate("/startup/123".to_string()),
            ]
        );
        assert!(submission.navigation().unwrap().contains("123"));
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_values() {
        let mut creator = MockPitchCreator::new();
        creator
            .expect_create_pitch()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let mut form = PitchForm::default();
        let input = valid_draft();
        let submission = form.submit(input.clone(), &author(), &creator).await;

        assert_eq!(
            submission.result,
            SubmissionResult::Error {
                message: UNEXPECTED_ERROR.to_string(),
                field_errors: FieldErrors::new(),
            }
        );
        assert_eq!(form.values(), &input);
        assert!(form.errors().is_empty());
        assert!(submission.navigation().is_none());
        assert_eq!(submission.effects.len(), 1);
        assert_eq!(
            submission.notification().unwrap(),
            &Notification::error(UNEXPECTED_ERROR)
        );
    }

    #[tokio::test]
    async fn test_late_validation_error_is_generic() {
        let mut creator = MockPitchCreator::new();
        creator.expect_create_pitch().times(1).returning(|_, _| {
            Err(AppError::bad_request(
                "Validation failed",
                json!({ "title": ["taken"] }),
            ))
        });

        let mut form = PitchForm::default();
        let submission = form.submit(valid_draft(), &author(), &creator).await;

        let SubmissionResult::Error {
            message,
            field_errors,
        } = submission.result
        else {
            panic!("expected error");
        };
        assert_eq!(message, UNEXPECTED_ERROR);
        assert!(field_errors.is_empty());
        assert_eq!(form.values(), &valid_draft());
    }

    #[tokio::test]
    async fn test_resubmission_clears_stale_field_errors() {
        let mut creator = MockPitchCreator::new();
        creator
            .expect_create_pitch()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let mut form = PitchForm::default();
        let mut input = valid_draft();
        input.title.clear();
        form.submit(input, &author(), &creator).await;
        assert!(form.errors().contains("title"));

        form.submit(valid_draft(), &author(), &creator).await;
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_initial_state() {
        let form = PitchForm::default();

        assert_eq!(form.result(), &SubmissionResult::Initial);
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_pending());
    }
}
