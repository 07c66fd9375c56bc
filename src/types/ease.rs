//! Review grades

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::AnkiError;

/// Self-assessed recall difficulty for a review
///
/// Only these four values are accepted by `answerCards`; anything else is
/// rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ease {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Ease {
    pub const ALL: [Ease; 4] = [Ease::Again, Ease::Hard, Ease::Good, Ease::Easy];

    /// Wire value (1..=4)
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Ease::Again => "again",
            Ease::Hard => "hard",
            Ease::Good => "good",
            Ease::Easy => "easy",
        }
    }
}

impl TryFrom<i64> for Ease {
    type Error = AnkiError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Ease::Again),
            2 => Ok(Ease::Hard),
            3 => Ok(Ease::Good),
            4 => Ok(Ease::Easy),
            other => Err(AnkiError::InvalidEase(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Ease {
    type Error = AnkiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ease::try_from(i64::from(value))
    }
}

impl FromStr for Ease {
    type Err = AnkiError;

    /// Accepts `1`-`4` or a grade name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ease::try_from(n);
        }
        Ease::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| AnkiError::InvalidEase(s.to_string()))
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.value())
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}
