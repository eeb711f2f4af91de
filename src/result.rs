//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Chip movement after a player busts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Index of the losing player.
    pub loser: usize,
    /// The loser's bet, taken from their chips.
    pub amount: u32,
    /// Chips credited to each other player.
    pub share: u32,
    /// Chips lost to rounding when the bet does not split evenly.
    pub forfeited: u32,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player ran out of chips.
    Bankrupt {
        /// Index of the player with no chips left.
        player: usize,
    },
    /// The last round has been played.
    RoundLimit,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// The running total when the round ended.
    pub total: u8,
    /// Settlement for the player who busted. `None` when every hand ran out
    /// without anyone going over.
    pub settlement: Option<Settlement>,
    /// Chip balances after the round, in seating order.
    pub chips: Vec<u32>,
    /// Set when this round ended the session.
    pub session_end: Option<SessionEnd>,
}
