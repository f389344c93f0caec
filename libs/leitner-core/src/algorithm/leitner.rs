//! Leitner box transitions with exponential review intervals.
//!
//! A card in bucket `k >= 1` comes up every `2^k` days; bucket 0 comes up
//! every day.

use crate::types::AnswerDifficulty;

/// Days between reviews for a bucket, or `None` if the interval does not fit
/// in a `u64` (such a bucket is never due).
pub fn review_interval(bucket: u32) -> Option<u64> {
    1u64.checked_shl(bucket)
}

/// Whether cards in `bucket` are due on `day`.
pub fn is_due(bucket: u32, day: u64) -> bool {
    if bucket == 0 {
        return true;
    }
    match review_interval(bucket) {
        Some(interval) => day % interval == 0,
        None => false,
    }
}

/// Bucket a card moves to after being answered with `difficulty`.
///
/// `Easy` caps at `u32::MAX`; a bucket that high is never due anyway.
pub fn next_bucket(current: u32, difficulty: AnswerDifficulty) -> u32 {
    match difficulty {
        AnswerDifficulty::Wrong => 0,
        AnswerDifficulty::Hard => current,
        AnswerDifficulty::Easy => current.saturating_add(1),
    }
}
