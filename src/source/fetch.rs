//! Load lifecycle and response decoding.
//!
//! The fetch is one-shot: [`LoadStatus`] only moves forward
//! (`Idle → Pending → Loaded | Failed`), and a result arriving in any state other
//! than `Pending` is dropped by the event handler.

use crate::domain::{MemberdeskError, Record, Result};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Longest slice of an error body echoed back to the user.
const MAX_ERROR_BODY_CHARS: usize = 120;

/// Progress of the one-shot member list load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet (waiting for permissions).
    #[default]
    Idle,

    /// Request issued, no answer yet.
    Pending,

    /// Records arrived and were loaded.
    Loaded {
        /// Unix timestamp of the load.
        at: i64,
        /// Number of records delivered by the source.
        count: usize,
    },

    /// The load failed; the list stays empty until the plugin is reloaded.
    Failed {
        /// Displayable reason.
        message: String,
    },
}

impl LoadStatus {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The failure message, if the load failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Builds a `Loaded` status stamped with the current time.
    #[must_use]
    pub fn loaded_now(count: usize) -> Self {
        Self::Loaded {
            at: chrono::Utc::now().timestamp(),
            count,
        }
    }

    /// Human-readable age of the loaded data, relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Returns `None` unless the status is `Loaded`.
    #[must_use]
    pub fn age(&self, now: i64) -> Option<String> {
        let Self::Loaded { at, .. } = self else {
            return None;
        };
        let diff = now - at;

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

/// Decodes a web request answer into records.
///
/// # Errors
///
/// - [`MemberdeskError::Load`] for a non-2xx status (with the start of the body)
/// - [`MemberdeskError::Decode`] if the body is not a JSON array of records
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<Record>> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        let snippet: String = text.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
        return Err(MemberdeskError::Load(if snippet.is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status}: {snippet}")
        }));
    }

    let records: Vec<Record> = serde_json::from_slice(body)?;
    tracing::debug!(count = records.len(), "decoded member payload");
    Ok(records)
}
