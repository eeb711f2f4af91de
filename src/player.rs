//! Player state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::BetError;

/// A seated player.
///
/// Chips persist across rounds; the hand, bet and all-in flag belong to the
/// current round. Only the owning [`Table`](crate::Table) changes betting
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    chips: u32,
    bet: u32,
    all_in: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            chips,
            bet: 0,
            all_in: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand, in the order they were drawn.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Returns the bet for the current round.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns whether the player has committed all of their chips.
    #[must_use]
    pub const fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Returns whether the hand holds a card of `value`.
    #[must_use]
    pub fn has_value(&self, value: u8) -> bool {
        self.hand.iter().any(|card| card.value() == value)
    }

    /// Adds a drawn card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Plays the first card of `value` from the hand.
    ///
    /// Returns the removed card, or `None` without touching the hand if no
    /// card has that value.
    pub fn play(&mut self, value: u8) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.value() == value)?;
        Some(self.hand.remove(index))
    }

    pub(crate) fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if amount > self.chips {
            return Err(BetError::InsufficientChips);
        }
        self.bet = amount;
        Ok(())
    }

    /// Matches `highest_bet`, going all in when it takes every chip.
    pub(crate) fn call(&mut self, highest_bet: u32) {
        if self.chips > highest_bet {
            self.bet = highest_bet;
        } else {
            self.bet = self.chips;
            self.all_in = true;
        }
    }

    pub(crate) const fn lose(&mut self, amount: u32) {
        self.chips = self.chips.saturating_sub(amount);
    }

    pub(crate) const fn win(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) const fn clear_bet(&mut self) {
        self.bet = 0;
        self.all_in = false;
    }

    pub(crate) fn clear_round(&mut self) {
        self.hand.clear();
        self.clear_bet();
    }
}
