//! Types Module
//!
//! Value objects decoded from (or sent to) the AnkiConnect service.
//! Every value is produced fresh per call; nothing here is cached.

mod card;
mod ease;
mod timestamp;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use card::{Card, FieldValue};
pub use ease::Ease;
pub use timestamp::Timestamp;

/// Name of a deck, compared by exact string equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck(String);

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Deck {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Deck {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Card identifier assigned by the remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

impl CardId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CardId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for CardId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(CardId)
    }
}
