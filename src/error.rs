//! Error types for ankirpc
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

use crate::types::CardId;

/// Result type alias using AnkiError
pub type Result<T> = std::result::Result<T, AnkiError>;

/// Unified error type for ankirpc operations
#[derive(Debug, Error)]
pub enum AnkiError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Connect/send/receive failure, timeout, or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// Body is not JSON, or `result` does not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    /// The response carried a non-null `error` string (kept verbatim)
    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Expected exactly one card for id {card_id}, got {count}")]
    Cardinality { card_id: CardId, count: usize },

    /// The remote service returned `false` for a review without an error string
    #[error("Unknown error answering card {card_id}: submission rejected")]
    SubmissionRejected { card_id: CardId },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid ease {0}: must be 1 (again), 2 (hard), 3 (good) or 4 (easy)")]
    InvalidEase(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnkiError {
    /// True for network-level failures (including timeouts)
    pub fn is_transport(&self) -> bool {
        matches!(self, AnkiError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, AnkiError::Decode(_))
    }

    /// The message reported by the remote service, if this is a remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            AnkiError::Remote(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnkiError {
    fn from(error: serde_json::Error) -> Self {
        AnkiError::Decode(error.to_string())
    }
}

impl From<reqwest::Error> for AnkiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AnkiError::Transport(format!("request timed out: {}", error))
        } else {
            AnkiError::Transport(error.to_string())
        }
    }
}
