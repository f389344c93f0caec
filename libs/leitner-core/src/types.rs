//! Core types for the Leitner scheduler.

use std::collections::{BTreeMap, HashSet};
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FlashcardError, Result};

/// Immutable question/answer card.
///
/// Two cards are equal only if they share an id, so cards with identical text
/// still occupy separate slots in a bucket.
#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    id: Uuid,
    front: String,
    back: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    tags: Vec<String>,
}

impl Flashcard {
    /// Validate the inputs and build a card with a fresh id.
    ///
    /// `front`, `back` and `hint` are trimmed. Tags are checked after trimming
    /// but stored as given.
    pub fn new(front: &str, back: &str, hint: Option<&str>, tags: Vec<String>) -> Result<Self> {
        let front = front.trim();
        if front.is_empty() {
            return Err(FlashcardError::EmptyFront);
        }

        let back = back.trim();
        if back.is_empty() {
            return Err(FlashcardError::EmptyBack);
        }

        let hint = match hint.map(str::trim) {
            Some("") => return Err(FlashcardError::EmptyHint),
            other => other.map(str::to_string),
        };

        if let Some(index) = tags.iter().position(|t| t.trim().is_empty()) {
            return Err(FlashcardError::EmptyTag { index });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            front: front.to_string(),
            back: back.to_string(),
            hint,
            tags,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Factory form of [`Flashcard::new`].
pub fn create_flashcard(
    front: &str,
    back: &str,
    hint: Option<&str>,
    tags: Vec<String>,
) -> Result<Flashcard> {
    Flashcard::new(front, back, hint, tags)
}

/// How well a card was recalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerDifficulty {
    Wrong,
    Hard,
    Easy,
}

impl AnswerDifficulty {
    /// Convert to numeric value (0-2).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Wrong => 0,
            Self::Hard => 1,
            Self::Easy => 2,
        }
    }

    /// Create from numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Wrong),
            1 => Some(Self::Hard),
            2 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// Bucket number to the cards currently at that level.
///
/// A card must sit in at most one bucket; only the functions in
/// [`crate::algorithm`] move cards, and they keep that invariant.
pub type BucketMap = BTreeMap<u32, HashSet<Flashcard>>;

/// One entry of the review log.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRecord {
    pub card: Flashcard,
    pub timestamp: DateTime<Utc>,
    pub difficulty: AnswerDifficulty,
}

/// What `update` does with a card that is in no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCardPolicy {
    /// Reject the update with `CardNotFound`.
    Fail,
    /// Treat the card as sitting in bucket 0 and apply the transition.
    TreatAsNew,
}

impl Default for MissingCardPolicy {
    fn default() -> Self {
        Self::Fail
    }
}

impl MissingCardPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::TreatAsNew => "treat_as_new",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fail" => Some(Self::Fail),
            "treat_as_new" => Some(Self::TreatAsNew),
            _ => None,
        }
    }
}

/// How a hint is produced for a card without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintPolicy {
    /// Mask the answer, keeping the first letter of each word.
    Derived,
    /// Fail with `NoHint`.
    Strict,
}

impl Default for HintPolicy {
    fn default() -> Self {
        Self::Derived
    }
}

impl HintPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Derived => "derived",
            Self::Strict => "strict",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "derived" => Some(Self::Derived),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Behaviour switches for a study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeitnerSettings {
    pub missing_card: MissingCardPolicy,
    pub hint_policy: HintPolicy,
    pub mastery_threshold: u32,
}

impl Default for LeitnerSettings {
    fn default() -> Self {
        Self {
            missing_card: MissingCardPolicy::default(),
            hint_policy: HintPolicy::default(),
            mastery_threshold: crate::progress::MASTERY_THRESHOLD,
        }
    }
}
