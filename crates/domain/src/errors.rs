//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_FILE_SIZE_BYTES, MIN_TEXT_CHARS};

/// Main error type for MailTriage
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TriageError {
    /// Input refused by the client-side validator; never reaches the network
    #[error("{0}")]
    Rejected(InputRejection),

    /// A classification request is already in flight
    #[error("An analysis is already in progress")]
    Busy,

    /// The classification service failed; carries the user-facing message
    #[error("{0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not allowed in the current analysis state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for MailTriage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Why the input validator refused a file or text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InputRejection {
    #[error("Provide a file or paste the email text")]
    NoInput,

    #[error("Only .txt or .pdf files are accepted")]
    UnsupportedExtension { file_name: String },

    #[error("File too large (maximum 1MB)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Text too short (minimum 10 characters)")]
    TextTooShort { length: usize, min: usize },

    /// Text entry is disabled while a file is selected
    #[error("Clear the selected file before typing text")]
    TextLockedByFile,
}

impl InputRejection {
    pub fn file_too_large(size: u64) -> Self {
        Self::FileTooLarge { size, max: MAX_FILE_SIZE_BYTES }
    }

    pub fn text_too_short(length: usize) -> Self {
        Self::TextTooShort { length, min: MIN_TEXT_CHARS }
    }
}

impl From<InputRejection> for TriageError {
    fn from(value: InputRejection) -> Self {
        TriageError::Rejected(value)
    }
}

/// Failure reported by a gateway talking to the classification service.
///
/// Gateways stay message-agnostic; services turn this into a user-facing
/// [`TriageError::Transport`] with an operation-specific fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Non-2xx response; `detail` is the service's `{"detail": ...}` if any
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message shown to the user: the service's `detail` when present,
    /// otherwise `fallback` (with the cause for network and decode failures).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } if !detail.trim().is_empty() => {
                detail.clone()
            }
            Self::Status { .. } => fallback.to_string(),
            Self::Network(cause) | Self::Decode(cause) => format!("{fallback}: {cause}"),
        }
    }

    /// Convert into the crate-wide error using `fallback` as described in
    /// [`TransportError::user_message`].
    pub fn into_triage(self, fallback: &str) -> TriageError {
        TriageError::Transport(self.user_message(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_fallback() {
        let err = TransportError::Status { status: 400, detail: Some("Texto muito curto".into()) };
        assert_eq!(err.user_message("Failed to process text"), "Texto muito curto");
    }

    #[test]
    fn missing_or_blank_detail_uses_fallback() {
        let err = TransportError::Status { status: 500, detail: None };
        assert_eq!(err.user_message("Failed to process file"), "Failed to process file");

        let blank = TransportError::Status { status: 502, detail: Some("  ".into()) };
        assert_eq!(blank.user_message("Failed to process file"), "Failed to process file");
    }

    #[test]
    fn network_failure_keeps_cause() {
        let err = TransportError::Network("connection refused".into());
        assert_eq!(
            err.into_triage("Failed to submit feedback"),
            TriageError::Transport("Failed to submit feedback: connection refused".into())
        );
    }

    #[test]
    fn rejection_messages_are_user_facing() {
        assert_eq!(
            TriageError::from(InputRejection::NoInput).to_string(),
            "Provide a file or paste the email text"
        );
        assert_eq!(
            InputRejection::file_too_large(2_097_152).to_string(),
            "File too large (maximum 1MB)"
        );
        assert_eq!(
            InputRejection::text_too_short(4),
            InputRejection::TextTooShort { length: 4, min: 10 }
        );
    }
}
