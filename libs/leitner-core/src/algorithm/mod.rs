//! Due-card selection and bucket transitions.
//!
//! Every function here is pure: inputs are borrowed and a fresh collection is
//! returned. These are the only places that move cards between buckets.

pub mod leitner;

use std::collections::HashSet;

use crate::error::{FlashcardError, Result};
use crate::types::{AnswerDifficulty, BucketMap, Flashcard, MissingCardPolicy};

/// Cards due for review on `day` (1-based).
///
/// Bucket 0 is always included; bucket `k` is included when `day` is a
/// multiple of `2^k`.
pub fn practice(day: i64, buckets: &BucketMap) -> Result<HashSet<Flashcard>> {
    if day < 1 {
        return Err(FlashcardError::InvalidDay { day });
    }
    let day = day as u64;

    Ok(buckets
        .iter()
        .filter(|(bucket, _)| leitner::is_due(**bucket, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect())
}

/// Move `card` according to `difficulty`, failing if it is in no bucket.
pub fn update(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> Result<BucketMap> {
    update_with(MissingCardPolicy::Fail, buckets, card, difficulty)
}

/// Move `card` according to `difficulty` using an explicit not-found policy.
pub fn update_with(
    policy: MissingCardPolicy,
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> Result<BucketMap> {
    let current = match (find_bucket(buckets, card), policy) {
        (Some(bucket), _) => bucket,
        (None, MissingCardPolicy::TreatAsNew) => 0,
        (None, MissingCardPolicy::Fail) => {
            return Err(FlashcardError::CardNotFound { id: card.id() })
        }
    };

    let mut next = buckets.clone();
    if let Some(cards) = next.get_mut(&current) {
        cards.remove(card);
    }

    let target = leitner::next_bucket(current, difficulty);
    next.entry(target).or_default().insert(card.clone());

    Ok(next)
}

/// Add a new card to bucket 0.
///
/// A card that is already in some bucket is left where it is.
pub fn insert(buckets: &BucketMap, card: Flashcard) -> BucketMap {
    let mut next = buckets.clone();
    if find_bucket(buckets, &card).is_none() {
        next.entry(0).or_default().insert(card);
    }
    next
}

/// Bucket currently holding `card`, if any.
pub fn find_bucket(buckets: &BucketMap, card: &Flashcard) -> Option<u32> {
    buckets
        .iter()
        .find(|(_, cards)| cards.contains(card))
        .map(|(bucket, _)| *bucket)
}
