//! Search query construction
//!
//! Deck names are embedded in Anki search syntax inside a quoted `deck:`
//! clause. Inside quotes the search parser treats `\` and `"` as syntax and
//! `*` / `_` as wildcards, so each is backslash-escaped to match the literal
//! name. Control characters cannot be expressed and are rejected.

use crate::error::{AnkiError, Result};
use crate::types::Deck;

/// Status filter selecting cards ready for review or never studied
pub const DUE_OR_NEW: &str = "(is:due OR is:new)";

/// Quote and escape a deck name as a `deck:` clause
pub fn deck_clause(deck: &Deck) -> Result<String> {
    let name = deck.as_str();
    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Err(AnkiError::InvalidQuery(format!(
            "deck name {:?} contains control character {:?}",
            name, c
        )));
    }

    let mut clause = String::with_capacity(name.len() + 8);
    clause.push_str("deck:\"");
    for c in name.chars() {
        if matches!(c, '\\' | '"' | '*' | '_') {
            clause.push('\\');
        }
        clause.push(c);
    }
    clause.push('"');
    Ok(clause)
}

/// `deck:"<name>" (is:due OR is:new)`
pub fn due_or_new_query(deck: &Deck) -> Result<String> {
    Ok(format!("{} {}", deck_clause(deck)?, DUE_OR_NEW))
}
