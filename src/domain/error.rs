//! Error types for the memberdesk plugin.
//!
//! This module defines the centralized error type [`MemberdeskError`] and a type alias
//! [`Result`] used by the fallible edges of the plugin: decoding the fetched member
//! payload, loading themes and writing trace files. List transitions never fail; they
//! report whether they changed anything instead.

use thiserror::Error;

/// The main error type for memberdesk operations.
///
/// Most variants carry a human-readable description because they end up on screen
/// (a failed load is rendered in the empty-state panel) or in the trace file.
#[derive(Debug, Error)]
pub enum MemberdeskError {
    /// Fetching the member list failed.
    ///
    /// Covers transport failures reported by the host and non-success HTTP statuses.
    #[error("Load error: {0}")]
    Load(String),

    /// The fetched payload was not a JSON array of member records.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for memberdesk operations.
pub type Result<T> = std::result::Result<T, MemberdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert_with_question_mark() {
        fn parse(input: &str) -> Result<Vec<u32>> {
            Ok(serde_json::from_str(input)?)
        }

        let err = parse("not json").unwrap_err();
        assert!(matches!(err, MemberdeskError::Decode(_)));
        assert!(err.to_string().starts_with("Decode error:"));
    }

    #[test]
    fn load_error_message_is_displayed_verbatim() {
        let err = MemberdeskError::Load("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Load error: HTTP 503");
    }
}
