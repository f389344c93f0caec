//! Building and normalising bucket collections.

use std::collections::HashSet;

use crate::error::{FlashcardError, Result};
use crate::types::{BucketMap, Flashcard};

/// Collection with every card in bucket 0.
pub fn seed(cards: impl IntoIterator<Item = Flashcard>) -> BucketMap {
    let mut buckets = BucketMap::new();
    buckets.insert(0, cards.into_iter().collect());
    buckets
}

/// Ordered array form: index `k` holds bucket `k`, gaps are empty sets.
pub fn to_bucket_sets(buckets: &BucketMap) -> Vec<HashSet<Flashcard>> {
    let Some(highest) = buckets.keys().next_back() else {
        return Vec::new();
    };

    let mut sets = vec![HashSet::new(); *highest as usize + 1];
    for (bucket, cards) in buckets {
        sets[*bucket as usize] = cards.clone();
    }
    sets
}

/// Check an externally supplied bucket index.
pub fn bucket_number(index: i64) -> Result<u32> {
    u32::try_from(index).map_err(|_| FlashcardError::InvalidBucket { index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(front: &str) -> Flashcard {
        Flashcard::new(front, "answer", None, vec![]).unwrap()
    }

    #[test]
    fn seed_fills_bucket_zero() {
        let (a, b) = (card("A"), card("B"));
        let buckets = seed(vec![a.clone(), b.clone()]);
        assert_eq!(buckets.len(), 1);
        assert!(buckets[&0].contains(&a));
        assert!(buckets[&0].contains(&b));
    }

    #[test]
    fn array_form_fills_gaps() {
        let (a, b, c) = (card("A"), card("B"), card("C"));
        let mut buckets = BucketMap::new();
        buckets.insert(0, [a.clone()].into_iter().collect());
        buckets.insert(2, [b.clone(), c.clone()].into_iter().collect());

        let sets = to_bucket_sets(&buckets);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0], HashSet::from([a]));
        assert!(sets[1].is_empty());
        assert_eq!(sets[2], HashSet::from([b, c]));
    }

    #[test]
    fn array_form_of_empty_collection() {
        assert!(to_bucket_sets(&BucketMap::new()).is_empty());
    }

    #[test]
    fn out_of_range_bucket_index_rejected() {
        assert_eq!(bucket_number(3).unwrap(), 3);
        assert_eq!(
            bucket_number(-1).unwrap_err(),
            FlashcardError::InvalidBucket { index: -1 }
        );
        assert_eq!(bucket_number(u32::MAX as i64).unwrap(), u32::MAX);
        assert_eq!(
            bucket_number(5_000_000_000).unwrap_err(),
            FlashcardError::InvalidBucket { index: 5_000_000_000 }
        );
    }
}
