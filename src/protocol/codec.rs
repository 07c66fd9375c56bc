//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! {"action": "<name>", "version": 6, "params": {...}}
//! ```
//!
//! ### Response
//! ```text
//! {"result": <any>, "error": <string|null>}
//! ```
//!
//! Decoding is two-pass: the envelope is checked generically first, and only
//! a response without an error has its `result` interpreted as a typed value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{Action, Reply};
use crate::error::{AnkiError, Result};

/// AnkiConnect API version spoken by this client
pub const PROTOCOL_VERSION: u8 = 6;

/// Maximum accepted response body (64 MB)
pub const MAX_RESPONSE_SIZE: usize = 64 * 1024 * 1024;

#[derive(Serialize)]
struct Request<'a> {
    action: &'a str,
    version: u8,
    params: Value,
}

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode an action as a request body
pub fn encode_request(action: &Action) -> Result<Vec<u8>> {
    let request = Request {
        action: action.name(),
        version: PROTOCOL_VERSION,
        params: action.params(),
    };
    serde_json::to_vec(&request)
        .map_err(|e| AnkiError::Decode(format!("failed to encode {}: {}", action.name(), e)))
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode the generic result/error envelope
///
/// A non-null `error` always wins, whatever `result` holds. A missing
/// `result` next to a null error decodes as `Success(Null)`.
pub fn decode_envelope(bytes: &[u8]) -> Result<Reply> {
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(AnkiError::Decode(format!(
            "Response too large: {} bytes (max {})",
            bytes.len(),
            MAX_RESPONSE_SIZE
        )));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AnkiError::Decode(format!("Response is not valid JSON: {}", e)))?;

    let mut envelope = match value {
        Value::Object(map) => map,
        other => {
            return Err(AnkiError::Decode(format!(
                "Expected a JSON object envelope, got {}",
                kind_of(&other)
            )))
        }
    };

    match envelope.remove("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => return Ok(Reply::Failure(message)),
        Some(other) => {
            return Err(AnkiError::Decode(format!(
                "Envelope `error` must be a string or null, got {}",
                kind_of(&other)
            )))
        }
    }

    Ok(Reply::Success(envelope.remove("result").unwrap_or(Value::Null)))
}

/// Interpret an untyped `result` as `T`
pub fn decode_result<T: DeserializeOwned>(result: Value) -> Result<T> {
    serde_json::from_value(result)
        .map_err(|e| AnkiError::Decode(format!("Unexpected result shape: {}", e)))
}

/// Decode a full response body into a typed result
pub fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let result = decode_envelope(bytes)?.into_result()?;
    decode_result(result)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
