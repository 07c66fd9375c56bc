//! Action definitions
//!
//! Represents the AnkiConnect actions this client issues.

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::{CardId, Ease};

/// Action types, by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Version,
    DeckNames,
    FindCards,
    CardsInfo,
    AnswerCards,
}

impl ActionType {
    /// The `action` string sent on the wire
    pub fn name(self) -> &'static str {
        match self {
            ActionType::Version => "version",
            ActionType::DeckNames => "deckNames",
            ActionType::FindCards => "findCards",
            ActionType::CardsInfo => "cardsInfo",
            ActionType::AnswerCards => "answerCards",
        }
    }
}

/// One review grade inside an `answerCards` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAnswer {
    pub card_id: CardId,
    pub ease: Ease,
}

/// A request to the remote service
#[derive(Debug, Clone)]
pub enum Action {
    /// API version (health check)
    Version,

    /// List all deck names
    DeckNames,

    /// Search cards with a query expression
    FindCards { query: String },

    /// Full card records for the given ids
    CardsInfo { cards: Vec<CardId> },

    /// Submit review grades
    AnswerCards { answers: Vec<CardAnswer> },
}

impl Action {
    /// Get the action type
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Version => ActionType::Version,
            Action::DeckNames => ActionType::DeckNames,
            Action::FindCards { .. } => ActionType::FindCards,
            Action::CardsInfo { .. } => ActionType::CardsInfo,
            Action::AnswerCards { .. } => ActionType::AnswerCards,
        }
    }

    pub fn name(&self) -> &'static str {
        self.action_type().name()
    }

    /// The `params` object; empty for parameterless actions
    pub fn params(&self) -> Value {
        match self {
            Action::Version | Action::DeckNames => json!({}),
            Action::FindCards { query } => json!({ "query": query }),
            Action::CardsInfo { cards } => json!({ "cards": cards }),
            Action::AnswerCards { answers } => json!({ "answers": answers }),
        }
    }
}
