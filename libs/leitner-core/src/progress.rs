//! Progress statistics over buckets and review history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{AnswerDifficulty, BucketMap, ReviewRecord};

/// Lowest bucket counted as mastered.
pub const MASTERY_THRESHOLD: u32 = 3;

/// Summary of a learner's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_cards: usize,
    /// Only buckets present in the collection are listed.
    pub cards_per_bucket: BTreeMap<u32, usize>,
    pub average_bucket: f64,
    pub mastered_cards: usize,
    /// Percentage (0-100) of reviews not answered `Wrong`.
    pub success_rate: f64,
}

/// Compute statistics with the default mastery threshold.
pub fn compute_progress(buckets: &BucketMap, history: &[ReviewRecord]) -> ProgressStats {
    compute_progress_with(buckets, history, MASTERY_THRESHOLD)
}

pub fn compute_progress_with(
    buckets: &BucketMap,
    history: &[ReviewRecord],
    mastery_threshold: u32,
) -> ProgressStats {
    let cards_per_bucket: BTreeMap<u32, usize> = buckets
        .iter()
        .map(|(bucket, cards)| (*bucket, cards.len()))
        .collect();

    let total_cards: usize = cards_per_bucket.values().sum();
    let weighted: f64 = cards_per_bucket
        .iter()
        .map(|(bucket, count)| *bucket as f64 * *count as f64)
        .sum();
    let average_bucket = if total_cards == 0 {
        0.0
    } else {
        weighted / total_cards as f64
    };

    let mastered_cards = cards_per_bucket
        .range(mastery_threshold..)
        .map(|(_, count)| count)
        .sum();

    let successes = history
        .iter()
        .filter(|record| record.difficulty != AnswerDifficulty::Wrong)
        .count();
    let success_rate = if history.is_empty() {
        0.0
    } else {
        successes as f64 / history.len() as f64 * 100.0
    };

    ProgressStats {
        total_cards,
        cards_per_bucket,
        average_bucket,
        mastered_cards,
        success_rate,
    }
}
