//! Card snapshot returned by `cardsInfo`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CardId, Deck, Timestamp};

/// One note field: rendered content plus its display position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: String,
    pub order: u32,
}

/// Snapshot of a card at fetch time
///
/// Extra keys in the remote record (question, answer, css, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: CardId,

    /// Field name -> content and display order
    pub fields: HashMap<String, FieldValue>,

    /// Display order of the field the browser sorts by
    pub field_order: u32,

    /// Note type name
    pub model_name: String,

    pub deck_name: Deck,

    pub due: Timestamp,
}

impl Card {
    /// Fields sorted by display order, ties broken by name
    pub fn fields_in_order(&self) -> Vec<(&str, &FieldValue)> {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
            .collect();
        fields.sort_by(|a, b| a.1.order.cmp(&b.1.order).then_with(|| a.0.cmp(b.0)));
        fields
    }

    /// The field whose display order equals `field_order`, if present
    pub fn sort_field(&self) -> Option<(&str, &FieldValue)> {
        self.fields_in_order()
            .into_iter()
            .find(|(_, field)| field.order == self.field_order)
    }
}
