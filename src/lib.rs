//! A game engine for Nim Type Zero with optional `no_std` support.
//!
//! Players are dealt cards valued 0 to 3 from a 40-card deck, bet chips,
//! then take turns playing cards onto a running total. Whoever pushes the
//! total past [`BUST_THRESHOLD`] loses their bet to the rest of the table.
//!
//! The crate provides a [`Table`] type that manages the full session flow:
//! dealing, the betting round, the play round, settlement and the end of the
//! session.
//!
//! # Example
//!
//! ```
//! use nimzero::{BetAction, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.add_player("Player 1").unwrap();
//! table.add_player("Player 2").unwrap();
//!
//! table.start_round().unwrap();
//! table.open_bet(10).unwrap();
//! table.act(BetAction::Call).unwrap();
//!
//! assert!(table.bets_settled(table.highest_bet()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use action::BetAction;
pub use card::{COPIES_PER_VALUE, Card, DECK_SIZE, MAX_VALUE, Suit};
pub use deck::Deck;
pub use error::{
    BetError, DealError, DeckError, JoinError, ParseActionError, PlayError, RoundError,
    SettleError,
};
pub use game::{BUST_THRESHOLD, BetOutcome, BettingPhase, GameState, PlayOutcome, Table};
pub use options::TableOptions;
pub use player::Player;
pub use result::{RoundResult, SessionEnd, Settlement};
