//! API request, response and event types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from leitner-core
pub use leitner_core::{AnswerDifficulty, Flashcard, ProgressStats, Transition};

// === Card types ===

/// Body of `POST /add-card` and `POST /api/cards`
#[derive(Debug, Serialize, Deserialize)]
pub struct AddCardRequest {
    pub front: String,
    pub back: String,
    pub hint: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AddCardRequest {
    /// Validate the submitted fields into a card with a fresh id.
    pub fn into_card(self) -> leitner_core::Result<Flashcard> {
        Flashcard::new(&self.front, &self.back, self.hint.as_deref(), self.tags)
    }
}

#[derive(Debug, Serialize)]
pub struct AddCardResponse {
    pub status: &'static str,
    pub card: Flashcard,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub card_id: Uuid,
    pub hint: String,
}

// === Study types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeQuery {
    pub day: i64,
}

#[derive(Debug, Serialize)]
pub struct PracticeResponse {
    pub day: i64,
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub card_id: Uuid,
    pub difficulty: AnswerDifficulty,
    /// Card contents to use when `card_id` is unknown and the session treats
    /// missing cards as new.
    pub card: Option<AddCardRequest>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub card_id: Uuid,
    pub previous_bucket: Option<u32>,
    pub bucket: u32,
}

impl ReviewResponse {
    pub fn new(card_id: Uuid, transition: Transition) -> Self {
        Self {
            card_id,
            previous_bucket: transition.previous_bucket,
            bucket: transition.bucket,
        }
    }
}

// === Bucket types ===

/// All buckets in array form; index is the bucket number.
#[derive(Debug, Serialize)]
pub struct BucketsResponse {
    pub buckets: Vec<Vec<Flashcard>>,
}

#[derive(Debug, Serialize)]
pub struct BucketResponse {
    pub bucket: u32,
    pub cards: Vec<Flashcard>,
}

// === Events ===

/// Pushed to WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CardEvent {
    NewCard { card: Flashcard },
}

/// First message on a new WebSocket connection.
#[derive(Debug, Serialize)]
pub struct WelcomeMessage {
    pub message: &'static str,
}

/// Sort cards by front text so responses are stable.
pub fn sorted_cards(cards: impl IntoIterator<Item = Flashcard>) -> Vec<Flashcard> {
    let mut cards: Vec<Flashcard> = cards.into_iter().collect();
    cards.sort_by(|a, b| a.front().cmp(b.front()).then(a.id().cmp(&b.id())));
    cards
}
