//! Stateful study session.
//!
//! Owns the current bucket collection and review log, and advances them only
//! by replacing the collection with the result of the pure functions in
//! [`crate::algorithm`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::algorithm;
use crate::buckets;
use crate::error::Result;
use crate::hint;
use crate::progress::{self, ProgressStats};
use crate::types::{AnswerDifficulty, BucketMap, Flashcard, LeitnerSettings, ReviewRecord};

/// Where a card went after being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// `None` if the card was in no bucket (only possible with `TreatAsNew`).
    pub previous_bucket: Option<u32>,
    pub bucket: u32,
}

/// Holder of the current buckets and review history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    buckets: BucketMap,
    history: Vec<ReviewRecord>,
    settings: LeitnerSettings,
}

impl Session {
    pub fn new(settings: LeitnerSettings) -> Self {
        Self {
            buckets: BucketMap::new(),
            history: Vec::new(),
            settings,
        }
    }

    /// Start a session with `cards` in bucket 0.
    pub fn with_cards(
        cards: impl IntoIterator<Item = Flashcard>,
        settings: LeitnerSettings,
    ) -> Self {
        Self {
            buckets: buckets::seed(cards),
            history: Vec::new(),
            settings,
        }
    }

    pub fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    pub fn history(&self) -> &[ReviewRecord] {
        &self.history
    }

    pub fn settings(&self) -> &LeitnerSettings {
        &self.settings
    }

    /// Look a card up by id across all buckets.
    pub fn find_card(&self, id: Uuid) -> Option<&Flashcard> {
        self.buckets
            .values()
            .flat_map(|cards| cards.iter())
            .find(|card| card.id() == id)
    }

    pub fn add_card(&mut self, card: Flashcard) {
        self.buckets = algorithm::insert(&self.buckets, card);
    }

    pub fn practice(&self, day: i64) -> Result<HashSet<Flashcard>> {
        algorithm::practice(day, &self.buckets)
    }

    /// Apply an answer and record it.
    ///
    /// On error neither the buckets nor the history change.
    pub fn answer(
        &mut self,
        card: &Flashcard,
        difficulty: AnswerDifficulty,
        timestamp: DateTime<Utc>,
    ) -> Result<Transition> {
        let previous_bucket = algorithm::find_bucket(&self.buckets, card);
        let next = algorithm::update_with(
            self.settings.missing_card,
            &self.buckets,
            card,
            difficulty,
        )?;
        let bucket = algorithm::leitner::next_bucket(previous_bucket.unwrap_or(0), difficulty);

        self.buckets = next;
        self.history.push(ReviewRecord {
            card: card.clone(),
            timestamp,
            difficulty,
        });

        Ok(Transition {
            previous_bucket,
            bucket,
        })
    }

    pub fn hint(&self, card: &Flashcard) -> Result<String> {
        hint::get_hint(card, self.settings.hint_policy)
    }

    pub fn progress(&self) -> ProgressStats {
        progress::compute_progress_with(
            &self.buckets,
            &self.history,
            self.settings.mastery_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashcardError;
    use crate::types::{HintPolicy, MissingCardPolicy};
    use pretty_assertions::assert_eq;

    fn card(front: &str, back: &str) -> Flashcard {
        Flashcard::new(front, back, None, vec![]).unwrap()
    }

    #[test]
    fn seeded_session_practices_everything_on_day_one() {
        let (a, b) = (card("A", "1"), card("B", "2"));
        let session = Session::with_cards(vec![a.clone(), b.clone()], LeitnerSettings::default());
        let due = session.practice(1).unwrap();
        assert!(due.contains(&a) && due.contains(&b));
    }

    #[test]
    fn answer_moves_card_and_logs_review() {
        let a = card("A", "1");
        let mut session = Session::with_cards(vec![a.clone()], LeitnerSettings::default());

        let transition = session.answer(&a, AnswerDifficulty::Easy, Utc::now()).unwrap();
        assert_eq!(
            transition,
            Transition {
                previous_bucket: Some(0),
                bucket: 1
            }
        );
        assert_eq!(algorithm::find_bucket(session.buckets(), &a), Some(1));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].difficulty, AnswerDifficulty::Easy);

        // Bucket 1 is skipped on odd days.
        assert!(session.practice(3).unwrap().is_empty());
        assert!(session.practice(4).unwrap().contains(&a));
    }

    #[test]
    fn failed_answer_changes_nothing() {
        let (a, stranger) = (card("A", "1"), card("S", "2"));
        let mut session = Session::with_cards(vec![a.clone()], LeitnerSettings::default());
        let before = session.buckets().clone();

        let err = session
            .answer(&stranger, AnswerDifficulty::Easy, Utc::now())
            .unwrap_err();
        assert_eq!(err, FlashcardError::CardNotFound { id: stranger.id() });
        assert_eq!(session.buckets(), &before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn treat_as_new_policy_inserts_unknown_card() {
        let stranger = card("S", "2");
        let settings = LeitnerSettings {
            missing_card: MissingCardPolicy::TreatAsNew,
            ..Default::default()
        };
        let mut session = Session::new(settings);

        let transition = session
            .answer(&stranger, AnswerDifficulty::Easy, Utc::now())
            .unwrap();
        assert_eq!(transition.previous_bucket, None);
        assert_eq!(transition.bucket, 1);
        assert_eq!(session.find_card(stranger.id()), Some(&stranger));
    }

    #[test]
    fn add_card_and_find_by_id() {
        let a = card("A", "1");
        let mut session = Session::default();
        session.add_card(a.clone());
        session.add_card(a.clone());
        assert_eq!(session.find_card(a.id()), Some(&a));
        assert_eq!(session.progress().total_cards, 1);
    }

    #[test]
    fn hint_follows_policy() {
        let a = card("Capital?", "New Delhi");
        let mut session = Session::with_cards(vec![a.clone()], LeitnerSettings::default());
        assert_eq!(session.hint(&a).unwrap(), "N__ D____");

        session.settings.hint_policy = HintPolicy::Strict;
        assert!(session.hint(&a).is_err());
    }

    #[test]
    fn progress_uses_history() {
        let (a, b) = (card("A", "1"), card("B", "2"));
        let mut session =
            Session::with_cards(vec![a.clone(), b.clone()], LeitnerSettings::default());
        session.answer(&a, AnswerDifficulty::Wrong, Utc::now()).unwrap();
        session.answer(&b, AnswerDifficulty::Easy, Utc::now()).unwrap();

        let stats = session.progress();
        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.success_rate, 50.0);
        assert_eq!(stats.average_bucket, 0.5);
    }
}
