//! Hints shown while a card is being answered.

use crate::error::{FlashcardError, Result};
use crate::types::{Flashcard, HintPolicy};

/// Character replacing hidden letters in a derived hint.
pub const MASK_CHAR: char = '_';

/// Hint for `card`.
///
/// The card's own hint wins. Without one, [`HintPolicy::Derived`] masks the
/// answer and [`HintPolicy::Strict`] fails with `NoHint`.
pub fn get_hint(card: &Flashcard, policy: HintPolicy) -> Result<String> {
    match (card.hint(), policy) {
        (Some(hint), _) => Ok(hint.to_string()),
        (None, HintPolicy::Derived) => Ok(mask_answer(card.back())),
        (None, HintPolicy::Strict) => Err(FlashcardError::NoHint { id: card.id() }),
    }
}

/// Keep the first character of each word and mask the rest.
///
/// "George Orwell" becomes "G_____ O_____".
pub fn mask_answer(answer: &str) -> String {
    answer
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            let first = chars.next().into_iter();
            first.chain(chars.map(|_| MASK_CHAR)).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
