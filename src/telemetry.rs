//! Process-wide logging bootstrap.
//!
//! [`init`] installs the global `tracing` subscriber. It runs at most once per
//! process; later calls (from tests, or a binary calling it twice) are no-ops.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parses `text` or `json`; anything else falls back to text.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Installs the global subscriber with the given level filter and format.
///
/// Returns `true` if this call installed the subscriber, `false` if one was
/// already installed (by an earlier call or by another library).
pub fn init(log_level: &str, format: LogFormat) -> bool {
    let mut ran = false;
    let installed = *INSTALLED.get_or_init(|| {
        ran = true;
        let filter =
            EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = match format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_current_span(true)
                .try_init()
                .is_ok(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .is_ok(),
        };

        if installed {
            tracing::debug!(?format, "Logging initialized");
        }
        installed
    });

    ran && installed
}

/// Whether [`init`] has already run in this process.
pub fn is_initialized() -> bool {
    INSTALLED.get().is_some()
}
