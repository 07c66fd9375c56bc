//! AnkiConnect Client
//!
//! High-level study operations built on one pipeline:
//! encode action -> transport round trip -> decode envelope -> typed result.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{AnkiError, Result};
use crate::protocol::{
    decode_envelope, decode_result, encode_request, query, Action, CardAnswer, Reply,
};
use crate::types::{Card, CardId, Deck, Ease};

/// Client for the AnkiConnect automation API
///
/// Holds only its transport and an optional per-call deadline, so every
/// call is independent of every other. Sharing one client between threads
/// is fine when the transport allows it; ordering between concurrent calls
/// (e.g. two reviews of the same card) is up to the caller.
#[derive(Debug, Clone)]
pub struct AnkiClient<T: Transport = HttpTransport> {
    transport: T,
    deadline: Option<Duration>,
}

impl AnkiClient<HttpTransport> {
    /// Create a client talking HTTP to `config.endpoint`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> AnkiClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            deadline: None,
        }
    }

    /// Borrowed view of this client whose calls must finish within `deadline`
    ///
    /// An expired deadline fails the call with `AnkiError::Transport`.
    pub fn with_deadline(&self, deadline: Duration) -> AnkiClient<&T> {
        AnkiClient {
            transport: &self.transport,
            deadline: Some(deadline),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// API version reported by the service (connectivity probe)
    pub fn version(&self) -> Result<u32> {
        self.call(Action::Version)
    }

    /// All deck names, in the order the service returns them
    pub fn deck_names(&self) -> Result<Vec<Deck>> {
        self.call(Action::DeckNames)
    }

    /// Ids of cards in `deck` that are due or new
    ///
    /// Empty or unknown deck names are not checked here; whatever the
    /// service answers (often an empty list) is returned.
    pub fn due_card_ids(&self, deck: &Deck) -> Result<Vec<CardId>> {
        let query = query::due_or_new_query(deck)?;
        self.call(Action::FindCards { query })
    }

    /// Full record for one card
    ///
    /// Fails with `AnkiError::Cardinality` unless exactly one record comes back.
    pub fn card(&self, card_id: CardId) -> Result<Card> {
        let mut cards: Vec<Card> = self.call(Action::CardsInfo {
            cards: vec![card_id],
        })?;

        match cards.len() {
            1 => Ok(cards.remove(0)),
            count => {
                tracing::warn!("cardsInfo for {} returned {} records", card_id, count);
                Err(AnkiError::Cardinality { card_id, count })
            }
        }
    }

    /// Submit a review grade for one card
    pub fn answer(&self, card_id: CardId, ease: Ease) -> Result<()> {
        let outcomes: Vec<bool> = self.call(Action::AnswerCards {
            answers: vec![CardAnswer { card_id, ease }],
        })?;

        // `false` without an error string is how the service reports a card
        // it could not answer.
        if outcomes.first() == Some(&false) {
            tracing::warn!("answerCards rejected card {} with ease {}", card_id, ease);
            return Err(AnkiError::SubmissionRejected { card_id });
        }

        tracing::debug!("Answered card {} with {}", card_id, ease);
        Ok(())
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// One round trip: encode, send, check envelope, decode result
    fn call<R: DeserializeOwned>(&self, action: Action) -> Result<R> {
        let body = encode_request(&action)?;
        tracing::debug!("Sending {} ({} bytes)", action.name(), body.len());
        tracing::trace!("Request body: {}", String::from_utf8_lossy(&body));

        let raw = self.transport.send(body, self.deadline).map_err(|e| {
            tracing::debug!("{} failed in transport: {}", action.name(), e);
            e
        })?;
        tracing::trace!("Response body: {}", String::from_utf8_lossy(&raw));

        match decode_envelope(&raw)? {
            Reply::Success(result) => decode_result(result),
            Reply::Failure(message) => {
                tracing::warn!("{} failed remotely: {}", action.name(), message);
                Err(AnkiError::Remote(message))
            }
        }
    }
}
