//! Card types and deck constants.

use core::fmt;

/// Display suit of a card.
///
/// Suits carry no game meaning; they are derived from the card value so a
/// hand of mixed values looks varied on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs, shown on 0s.
    Clubs,
    /// Diamonds, shown on 1s.
    Diamonds,
    /// Hearts, shown on 2s.
    Hearts,
    /// Spades, shown on 3s.
    Spades,
}

impl Suit {
    /// All suits, indexed by card value.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Returns `None` if `value` is greater than [`MAX_VALUE`].
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value > MAX_VALUE {
            return None;
        }
        Some(Self { value })
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Returns the display suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[self.value as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.value, self.suit().symbol())
    }
}

/// Highest card value.
pub const MAX_VALUE: u8 = 3;

/// Number of copies of each value in a deck.
pub const COPIES_PER_VALUE: usize = 10;

/// Number of cards per deck.
pub const DECK_SIZE: usize = (MAX_VALUE as usize + 1) * COPIES_PER_VALUE;
