//! Error types for leitner-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Broad classification of a [`FlashcardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed flashcard input.
    Validation,
    /// Day or bucket index outside the accepted range.
    Range,
    /// Card or hint that does not exist.
    NotFound,
}

/// Errors raised by the scheduling core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("front side cannot be empty")]
    EmptyFront,

    #[error("back side must have an answer")]
    EmptyBack,

    #[error("hint must not be empty")]
    EmptyHint,

    #[error("tags must be non-empty strings (tag {index} is empty)")]
    EmptyTag { index: usize },

    #[error("day of the learning process must be >= 1, got {day}")]
    InvalidDay { day: i64 },

    #[error("bucket index must be between 0 and {max}, got {index}", max = u32::MAX)]
    InvalidBucket { index: i64 },

    #[error("card {id} not found in any bucket")]
    CardNotFound { id: Uuid },

    #[error("no hint available for card {id}")]
    NoHint { id: Uuid },
}

impl FlashcardError {
    /// Which part of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyFront | Self::EmptyBack | Self::EmptyHint | Self::EmptyTag { .. } => {
                ErrorKind::Validation
            }
            Self::InvalidDay { .. } | Self::InvalidBucket { .. } => ErrorKind::Range,
            Self::CardNotFound { .. } | Self::NoHint { .. } => ErrorKind::NotFound,
        }
    }
}
