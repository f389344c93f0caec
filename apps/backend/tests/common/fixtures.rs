//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Create an add-card request body.
pub fn add_card_request(
    front: &str,
    back: &str,
    hint: Option<&str>,
    tags: &[&str],
) -> serde_json::Value {
    let mut body = json!({ "front": front, "back": back, "tags": tags });
    if let Some(h) = hint {
        body["hint"] = json!(h);
    }
    body
}

/// Create a review request body.
pub fn review_request(card_id: &str, difficulty: &str) -> serde_json::Value {
    json!({ "card_id": card_id, "difficulty": difficulty })
}

/// Create a review request body that also carries the card contents.
pub fn review_request_with_card(
    card_id: &str,
    difficulty: &str,
    front: &str,
    back: &str,
) -> serde_json::Value {
    let mut body = review_request(card_id, difficulty);
    body["card"] = add_card_request(front, back, None, &[]);
    body
}

/// Collect the `front` field of every card in a JSON array.
pub fn fronts(cards: &serde_json::Value) -> Vec<String> {
    cards
        .as_array()
        .expect("array of cards")
        .iter()
        .map(|c| c["front"].as_str().expect("front").to_string())
        .collect()
}
