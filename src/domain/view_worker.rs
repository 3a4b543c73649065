//! Background worker that applies queued page views to the view counters.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::PitchRepository;
use crate::domain::view_event::ViewEvent;

/// Attempts per event, including the first one.
const MAX_ATTEMPTS: usize = 3;

/// Consumes view events until every sender is dropped.
///
/// Each increment is retried with exponential backoff. Events that still fail
/// are logged and dropped; a missing pitch (deleted in the meantime) is not an
/// error.
pub async fn run_view_worker(
    mut rx: mpsc::Receiver<ViewEvent>,
    repository: Arc<dyn PitchRepository>,
) {
    while let Some(event) = rx.recv().await {
        record_view(repository.as_ref(), event).await;
    }

    tracing::info!("View worker stopped");
}

async fn record_view(repository: &dyn PitchRepository, event: ViewEvent) {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_ATTEMPTS - 1);

    match Retry::spawn(strategy, || repository.increment_views(event.pitch_id)).await {
        Ok(true) => {
            metrics::counter!("pitch_views_total").increment(1);
        }
        Ok(false) => {
            tracing::debug!(pitch_id = event.pitch_id, "View for missing pitch ignored");
        }
        Err(e) => {
            metrics::counter!("pitch_views_failed_total").increment(1);
            tracing::warn!(
                pitch_id = event.pitch_id,
                error = %e,
                "Failed to record view after retries"
            );
        }
    }
}
