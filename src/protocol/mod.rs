//! Protocol Module
//!
//! Defines the AnkiConnect request/response contract.
//!
//! ## Protocol Format (JSON over HTTP, API version 6)
//!
//! ### Request Format
//! ```text
//! {"action": <string>, "version": 6, "params": {...}}
//! ```
//!
//! ### Actions
//! - `version`     - Params: none         - Result: integer
//! - `deckNames`   - Params: none         - Result: [string]
//! - `findCards`   - Params: query        - Result: [card id]
//! - `cardsInfo`   - Params: cards [id]   - Result: [card record]
//! - `answerCards` - Params: answers      - Result: [bool]
//!
//! ### Response Format
//! ```text
//! {"result": <any>, "error": <string|null>}
//! ```

mod action;
mod reply;
mod codec;
pub mod query;

pub use action::{Action, ActionType, CardAnswer};
pub use reply::Reply;
pub use codec::{
    decode_envelope, decode_response, decode_result, encode_request, MAX_RESPONSE_SIZE,
    PROTOCOL_VERSION,
};
