//! Codec Tests
//!
//! Tests for request encoding and response decoding.

use ankirpc::protocol::{
    decode_envelope, decode_response, encode_request, Action, CardAnswer, Reply,
    PROTOCOL_VERSION,
};
use ankirpc::{AnkiError, Card, CardId, Deck, Ease};
use serde_json::{json, Value};

fn encoded(action: &Action) -> Value {
    let bytes = encode_request(action).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_request_has_exactly_three_fields() {
    let actions = [
        Action::Version,
        Action::DeckNames,
        Action::FindCards { query: "deck:x".to_string() },
        Action::CardsInfo { cards: vec![CardId(1)] },
        Action::AnswerCards {
            answers: vec![CardAnswer { card_id: CardId(1), ease: Ease::Good }],
        },
    ];

    for action in &actions {
        let request = encoded(action);
        let object = request.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["action", "params", "version"], "{:?}", action);
        assert_eq!(request["version"], json!(6));
        assert_eq!(request["action"], json!(action.name()));
    }
}

#[test]
fn test_protocol_version_is_six() {
    assert_eq!(PROTOCOL_VERSION, 6);
}

#[test]
fn test_encode_deck_names() {
    assert_eq!(
        encoded(&Action::DeckNames),
        json!({ "action": "deckNames", "version": 6, "params": {} })
    );
}

#[test]
fn test_encode_find_cards() {
    let action = Action::FindCards {
        query: r#"deck:"Spanish::Verbs" (is:due OR is:new)"#.to_string(),
    };
    assert_eq!(
        encoded(&action),
        json!({
            "action": "findCards",
            "version": 6,
            "params": { "query": "deck:\"Spanish::Verbs\" (is:due OR is:new)" }
        })
    );
}

#[test]
fn test_encode_cards_info() {
    let action = Action::CardsInfo { cards: vec![CardId(1498938915662)] };
    assert_eq!(
        encoded(&action),
        json!({ "action": "cardsInfo", "version": 6, "params": { "cards": [1498938915662i64] } })
    );
}

#[test]
fn test_encode_answer_cards() {
    let action = Action::AnswerCards {
        answers: vec![CardAnswer { card_id: CardId(101), ease: Ease::Easy }],
    };
    assert_eq!(
        encoded(&action),
        json!({
            "action": "answerCards",
            "version": 6,
            "params": { "answers": [{ "cardId": 101, "ease": 4 }] }
        })
    );
}

// =============================================================================
// Envelope Decoding Tests
// =============================================================================

#[test]
fn test_decode_success() {
    let reply = decode_envelope(br#"{"result": ["Default"], "error": null}"#).unwrap();
    assert_eq!(reply, Reply::Success(json!(["Default"])));
}

#[test]
fn test_error_wins_over_result() {
    for body in [
        r#"{"result": null, "error": "boom"}"#,
        r#"{"result": [1, 2, 3], "error": "boom"}"#,
        r#"{"result": "not even a list", "error": "boom"}"#,
        r#"{"error": "boom"}"#,
    ] {
        let err = decode_response::<Vec<i64>>(body.as_bytes()).unwrap_err();
        assert_eq!(err.remote_message(), Some("boom"), "{}", body);
    }
}

#[test]
fn test_missing_error_field_is_success() {
    let ids: Vec<CardId> = decode_response(br#"{"result": [101, 102]}"#).unwrap();
    assert_eq!(ids, vec![CardId(101), CardId(102)]);
}

#[test]
fn test_missing_result_decodes_as_null() {
    let reply = decode_envelope(br#"{"error": null}"#).unwrap();
    assert_eq!(reply, Reply::Success(Value::Null));
}

#[test]
fn test_invalid_json_is_decode_error() {
    let err = decode_envelope(b"<html>not json</html>").unwrap_err();
    assert!(err.is_decode(), "{:?}", err);
}

#[test]
fn test_non_object_envelope_is_decode_error() {
    for body in ["[]", "42", "\"ok\"", "null"] {
        let err = decode_envelope(body.as_bytes()).unwrap_err();
        assert!(err.is_decode(), "{}: {:?}", body, err);
    }
}

#[test]
fn test_non_string_error_is_decode_error() {
    let err = decode_envelope(br#"{"result": null, "error": 17}"#).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_wrong_result_shape_is_decode_error() {
    let err = decode_response::<Vec<Deck>>(br#"{"result": {"a": 1}, "error": null}"#).unwrap_err();
    assert!(matches!(err, AnkiError::Decode(_)));
}

// =============================================================================
// Card Decoding Tests
// =============================================================================

#[test]
fn test_decode_card_ignores_extra_keys() {
    let body = json!({
        "result": [{
            "answer": "back",
            "question": "front",
            "deckName": "Spanish::Verbs",
            "modelName": "Basic",
            "fieldOrder": 1,
            "fields": {
                "Front": { "value": "hablar", "order": 0 },
                "Back": { "value": "to speak", "order": 1 }
            },
            "cardId": 101,
            "interval": 3,
            "due": 1700000000
        }],
        "error": null
    });

    let cards: Vec<Card> = decode_response(body.to_string().as_bytes()).unwrap();
    let card = &cards[0];
    assert_eq!(card.card_id, CardId(101));
    assert_eq!(card.deck_name, Deck::from("Spanish::Verbs"));
    assert_eq!(card.model_name, "Basic");
    assert_eq!(card.due.as_epoch_seconds(), 1_700_000_000);
    assert_eq!(card.fields["Back"].value, "to speak");
    assert_eq!(card.sort_field().map(|(name, _)| name), Some("Back"));
}

#[test]
fn test_decode_card_with_string_due_fails() {
    let body = json!({
        "result": [{
            "deckName": "Default",
            "modelName": "Basic",
            "fieldOrder": 0,
            "fields": {},
            "cardId": 1,
            "due": "1700000000"
        }],
        "error": null
    });

    let err = decode_response::<Vec<Card>>(body.to_string().as_bytes()).unwrap_err();
    assert!(err.is_decode(), "{:?}", err);
}

#[test]
fn test_decode_card_missing_due_fails() {
    let body = json!({
        "result": [{
            "deckName": "Default",
            "modelName": "Basic",
            "fieldOrder": 0,
            "fields": {},
            "cardId": 1
        }],
        "error": null
    });

    let err = decode_response::<Vec<Card>>(body.to_string().as_bytes()).unwrap_err();
    assert!(err.is_decode());
}
