//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when adding a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join before the first round.
    #[error("players can only join before the first round")]
    InvalidState,
    /// Another player already uses this name.
    #[error("player name already taken")]
    DuplicateName,
    /// The deck cannot deal a full hand to one more player.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("at least two players are needed")]
    NotEnoughPlayers,
    /// Hands must hold at least one card.
    #[error("hand size must be at least one")]
    EmptyHand,
    /// Not enough cards in the deck for every hand.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The deck ran out mid-deal.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is still in progress.
    #[error("a round is still in progress")]
    InvalidState,
    /// The session has ended.
    #[error("the session is over")]
    SessionOver,
    /// Dealing the new round failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The opening bet has already been placed.
    #[error("the opening bet has already been placed")]
    AlreadyOpened,
    /// Nobody has opened the betting yet.
    #[error("nobody has opened the betting yet")]
    NotOpened,
    /// The bet is larger than the player's chips.
    #[error("not enough chips")]
    InsufficientChips,
    /// A raise must be at least the highest bet.
    #[error("raise is below the highest bet")]
    BelowHighestBet,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// The current player holds no card of this value.
    #[error("no card with value {0} in hand")]
    NotInHand(u8),
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when parsing a betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The input is not `call`, `fold` or `raise`.
    #[error("expected call, fold or raise")]
    Unknown,
    /// `raise` was given without an amount.
    #[error("raise needs an amount")]
    MissingAmount,
    /// The raise amount is not a number.
    #[error("raise amount is not a number")]
    InvalidAmount,
}
