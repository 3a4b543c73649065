//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::forms::PitchForm;
use crate::application::services::{PitchService, SessionService};
use crate::domain::view_event::ViewEvent;

#[derive(Clone)]
pub struct AppState {
    pub pitch_service: Arc<PitchService>,
    pub session_service: Arc<SessionService>,
    pub view_sender: mpsc::Sender<ViewEvent>,
    pub success_message: Arc<str>,
}

impl AppState {
    pub fn new(
        pitch_service: Arc<PitchService>,
        session_service: Arc<SessionService>,
        view_sender: mpsc::Sender<ViewEvent>,
        success_message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            pitch_service,
            session_service,
            view_sender,
            success_message: success_message.into(),
        }
    }

    /// A fresh submission form for one request.
    pub fn new_pitch_form(&self) -> PitchForm {
        PitchForm::new(self.success_message.as_ref())
    }

    /// Queues a page view without waiting. A full queue drops the event.
    pub fn record_view(&self, pitch_id: i64) {
        if let Err(e) = self.view_sender.try_send(ViewEvent::new(pitch_id)) {
            metrics::counter!("pitch_views_dropped_total").increment(1);
            tracing::warn!(pitch_id, error = %e, "View event dropped");
        }
    }
}
