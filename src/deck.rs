//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{COPIES_PER_VALUE, Card, DECK_SIZE, MAX_VALUE};
use crate::error::DeckError;

/// An ordered pile of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 40-card deck and shuffles it.
    ///
    /// The shuffle is a Fisher–Yates pass, so every permutation of the
    /// multiset is equally likely.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for value in 0..=MAX_VALUE {
            for _ in 0..COPIES_PER_VALUE {
                // Every value in 0..=MAX_VALUE is a valid card.
                if let Some(card) = Card::new(value) {
                    cards.push(card);
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that yields `draws` in order, first element first.
    ///
    /// Useful for replaying a known deal.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
