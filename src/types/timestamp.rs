//! Epoch-seconds timestamp
//!
//! AnkiConnect reports due dates as an integer count of Unix seconds. This
//! type keeps that wire convention in one place: only a JSON integer decodes,
//! every other shape is an error rather than a zero/default value.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::error::{AnkiError, Result};

/// A point in time with whole-second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse Unix epoch seconds
    ///
    /// Fails when the value is outside the range chrono can represent.
    pub fn from_epoch_seconds(secs: i64) -> Result<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Timestamp)
            .ok_or_else(|| AnkiError::Decode(format!("timestamp out of range: {}", secs)))
    }

    pub fn as_epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn into_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_epoch_seconds())
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer count of Unix epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Timestamp, E> {
        DateTime::from_timestamp(v, 0)
            .map(Timestamp)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Timestamp, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
        self.visit_i64(secs)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_i64(EpochSecondsVisitor)
    }
}
