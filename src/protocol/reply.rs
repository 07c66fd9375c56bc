//! Response envelope
//!
//! Every AnkiConnect response is `{"result": <any>, "error": <string|null>}`.

use serde_json::Value;

use crate::error::{AnkiError, Result};

/// A decoded envelope: either the untyped result or the remote error message
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success(Value),
    Failure(String),
}

impl Reply {
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    /// The untyped result, or `AnkiError::Remote` with the message verbatim
    pub fn into_result(self) -> Result<Value> {
        match self {
            Reply::Success(value) => Ok(value),
            Reply::Failure(message) => Err(AnkiError::Remote(message)),
        }
    }
}
