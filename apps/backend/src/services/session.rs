//! Shared study session store.
//!
//! Holds the single [`Session`] for the server. Every mutation runs under one
//! lock so concurrent reviews are applied read, update, replace in order.

use chrono::Utc;
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use leitner_core::{
    bucket_number, to_bucket_sets, Flashcard, LeitnerSettings, MissingCardPolicy, ProgressStats,
    Session, Transition,
};

use crate::error::{ApiError, Result};
use crate::models::{sorted_cards, AddCardRequest, CardEvent, ReviewRequest};

const EVENT_CAPACITY: usize = 64;

/// Cards present when the server starts with seeding enabled.
pub fn demo_cards() -> leitner_core::Result<Vec<Flashcard>> {
    Ok(vec![
        Flashcard::new(
            "What is the capital of France?",
            "Paris",
            Some("City of Light"),
            vec![],
        )?,
        Flashcard::new("Who wrote '1984'?", "George Orwell", Some("Dystopian novel"), vec![])?,
    ])
}

pub struct SessionStore {
    session: Mutex<Session>,
    events: broadcast::Sender<CardEvent>,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            session: Mutex::new(session),
            events,
        }
    }

    /// Empty store, or one seeded with [`demo_cards`].
    pub fn with_settings(settings: LeitnerSettings, seed: bool) -> leitner_core::Result<Self> {
        let session = if seed {
            Session::with_cards(demo_cards()?, settings)
        } else {
            Session::new(settings)
        };
        Ok(Self::new(session))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CardEvent> {
        self.events.subscribe()
    }

    /// Validate and insert a submitted card, then notify subscribers.
    pub async fn add_card(&self, request: AddCardRequest) -> Result<Flashcard> {
        let card = request.into_card()?;

        self.session.lock().await.add_card(card.clone());
        tracing::info!(card_id = %card.id(), front = card.front(), "card added");

        // No subscribers is not an error.
        let _ = self.events.send(CardEvent::NewCard { card: card.clone() });

        Ok(card)
    }

    pub async fn practice(&self, day: i64) -> Result<Vec<Flashcard>> {
        let due = self.session.lock().await.practice(day)?;
        Ok(sorted_cards(due))
    }

    /// Apply a review and return the reviewed card with its transition.
    ///
    /// An unknown `card_id` is not found unless the session treats missing
    /// cards as new and the request carries the card contents; the card is
    /// then built with a fresh id and placed by the transition.
    pub async fn review(&self, request: ReviewRequest) -> Result<(Flashcard, Transition)> {
        let ReviewRequest {
            card_id,
            difficulty,
            card,
        } = request;

        let mut session = self.session.lock().await;
        let card = match (session.find_card(card_id), session.settings().missing_card, card) {
            (Some(known), _, _) => known.clone(),
            (None, MissingCardPolicy::TreatAsNew, Some(fields)) => fields.into_card()?,
            (None, _, _) => return Err(ApiError::NotFound(format!("Card {card_id}"))),
        };

        let transition = session.answer(&card, difficulty, Utc::now())?;
        tracing::info!(
            card_id = %card.id(),
            ?difficulty,
            from = ?transition.previous_bucket,
            to = transition.bucket,
            "review applied"
        );
        Ok((card, transition))
    }

    pub async fn hint(&self, card_id: Uuid) -> Result<String> {
        let session = self.session.lock().await;
        let card = session
            .find_card(card_id)
            .ok_or_else(|| ApiError::NotFound(format!("Card {card_id}")))?;
        Ok(session.hint(card)?)
    }

    /// All buckets in array form.
    pub async fn buckets(&self) -> Vec<Vec<Flashcard>> {
        let session = self.session.lock().await;
        to_bucket_sets(session.buckets())
            .into_iter()
            .map(sorted_cards)
            .collect()
    }

    /// Cards in one bucket; a bucket that does not exist is empty.
    pub async fn bucket(&self, index: i64) -> Result<(u32, Vec<Flashcard>)> {
        let bucket = bucket_number(index)?;
        let session = self.session.lock().await;
        let cards = session
            .buckets()
            .get(&bucket)
            .map(|cards| sorted_cards(cards.iter().cloned()))
            .unwrap_or_default();
        Ok((bucket, cards))
    }

    pub async fn progress(&self) -> ProgressStats {
        self.session.lock().await.progress()
    }
}
