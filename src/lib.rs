//! # ankirpc
//!
//! A blocking client for the AnkiConnect automation API:
//! - List decks
//! - Find cards that are due or new in a deck
//! - Fetch full card details
//! - Submit review grades
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       AnkiClient                             │
//! │      deck_names / due_card_ids / card / answer               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Action
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Protocol Codec                            │
//! │   encode_request  ──►  {action, version: 6, params}          │
//! │   decode_envelope ◄──  {result, error}  ──► typed result     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Transport                               │
//! │            (HTTP POST, pooled reqwest client)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use ankirpc::{AnkiClient, Config, Deck, Ease};
//!
//! # fn main() -> ankirpc::Result<()> {
//! let client = AnkiClient::new(&Config::default())?;
//! let deck = Deck::from("Spanish::Verbs");
//! for id in client.due_card_ids(&deck)? {
//!     let card = client.card(id)?;
//!     println!("{} due {}", card.card_id, card.due);
//!     client.answer(id, Ease::Good)?;
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod types;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AnkiError, Result};
pub use config::Config;
pub use network::{AnkiClient, HttpTransport, Transport};
pub use types::{Card, CardId, Deck, Ease, FieldValue, Timestamp};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ankirpc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
