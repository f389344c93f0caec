//! Leitner-style spaced repetition core.
//!
//! Provides:
//! - Flashcard value type and bucket collection
//! - Due-card selection (`practice`) and bucket transitions (`update`)
//! - Hint resolution and progress statistics
//! - A session type that owns the current collection and review log

pub mod algorithm;
pub mod buckets;
pub mod error;
pub mod hint;
pub mod progress;
pub mod session;
pub mod types;

pub use algorithm::{find_bucket, insert, practice, update, update_with};
pub use buckets::{bucket_number, seed, to_bucket_sets};
pub use error::{ErrorKind, FlashcardError, Result};
pub use hint::{get_hint, mask_answer};
pub use progress::{compute_progress, compute_progress_with, ProgressStats, MASTERY_THRESHOLD};
pub use session::{Session, Transition};
pub use types::{
    create_flashcard, AnswerDifficulty, BucketMap, Flashcard, HintPolicy, LeitnerSettings,
    MissingCardPolicy, ReviewRecord,
};
