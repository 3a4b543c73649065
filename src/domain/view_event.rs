//! View event model for asynchronous view counting.

use chrono::{DateTime, Utc};

/// A page view of a pitch detail page, queued for background counting.
///
/// Sent by the detail handler after the page is rendered so the response is
/// never blocked on the counter update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEvent {
    pub pitch_id: i64,
    pub viewed_at: DateTime<Utc>,
}

impl ViewEvent {
    pub fn new(pitch_id: i64) -> Self {
        Self {
            pitch_id,
            viewed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_event_creation() {
        let before = Utc::now();
        let event = ViewEvent::new(9);

        assert_eq!(event.pitch_id, 9);
        assert!(event.viewed_at >= before);
    }
}
