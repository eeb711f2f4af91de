//! Table engine and session management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{DealError, JoinError, RoundError};
use crate::options::TableOptions;
use crate::player::Player;

mod betting;
mod play;
mod settle;
pub mod state;

pub use betting::BetOutcome;
pub use play::PlayOutcome;
pub use state::{BettingPhase, GameState};

/// The running total a play may reach without losing. Going above it busts.
pub const BUST_THRESHOLD: u8 = 9;

/// A game table that owns the deck, the players and the round flow.
///
/// Use [`TableOptions`] to configure starting chips, hand size and the
/// number of rounds in the session.
#[derive(Debug, Clone)]
pub struct Table {
    /// Session options.
    options: TableOptions,
    /// Cards left to draw this round.
    deck: Deck,
    /// Seated players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current: usize,
    /// Sum of the cards played this round.
    total: u8,
    /// Current game state.
    state: GameState,
    /// Progress of this round's betting.
    betting: BettingPhase,
    /// Rounds started so far.
    round: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use nimzero::{GameState, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            options,
            deck,
            players: Vec::new(),
            current: 0,
            total: 0,
            state: GameState::WaitingForPlayers,
            betting: BettingPhase::AwaitingFirstBet,
            round: 0,
            rng,
        }
    }

    /// Seats a new player with the configured starting chips.
    ///
    /// Returns the player's index in turn order.
    ///
    /// # Errors
    ///
    /// Returns an error if the first round has already started, the name is
    /// taken, or the deck could not deal one more full hand.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let name = name.into();
        if self.players.iter().any(|player| player.name() == name) {
            return Err(JoinError::DuplicateName);
        }

        if (self.players.len() + 1) * self.options.hand_size > DECK_SIZE {
            return Err(JoinError::TableFull);
        }

        tracing::debug!(player = %name, "player joined");
        self.players
            .push(Player::new(name, self.options.starting_chips));
        Ok(self.players.len() - 1)
    }

    /// Starts the next round: resets the table and deals every player a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the session is over, or
    /// dealing fails.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts the next round with the given deck instead of a shuffled one.
    ///
    /// # Errors
    ///
    /// Same as [`Table::start_round`].
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), RoundError> {
        match self.state {
            GameState::WaitingForPlayers | GameState::RoundOver => {}
            GameState::SessionOver => return Err(RoundError::SessionOver),
            _ => return Err(RoundError::InvalidState),
        }

        if self.round >= self.options.rounds {
            self.state = GameState::SessionOver;
            return Err(RoundError::SessionOver);
        }

        if self.players.len() < 2 {
            return Err(DealError::NotEnoughPlayers.into());
        }

        let previous = self.state;
        self.reset_with_deck(deck);
        if let Err(err) = self.deal(self.options.hand_size) {
            self.state = previous;
            return Err(err.into());
        }
        Ok(())
    }

    /// Clears the table for a new round with a freshly shuffled deck.
    ///
    /// Hands, bets and the running total are cleared and the turn returns to
    /// the first player. Chips are kept.
    pub fn reset(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.reset_with_deck(deck);
    }

    /// Clears the table for a new round using the given deck.
    pub fn reset_with_deck(&mut self, deck: Deck) {
        self.deck = deck;
        for player in &mut self.players {
            player.clear_round();
        }
        self.total = 0;
        self.current = 0;
        self.betting = BettingPhase::AwaitingFirstBet;

        if self.state != GameState::SessionOver {
            self.state = GameState::Dealing;
        }
    }

    /// Deals `hand_size` cards to each player, one card at a time in turn
    /// order, and opens the betting.
    ///
    /// A successful deal starts a new round and counts towards
    /// [`TableOptions::rounds`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table has not been reset, fewer than two
    /// players are seated, the hand size is zero, or the deck is too small.
    pub fn deal(&mut self, hand_size: usize) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.players.len() < 2 {
            return Err(DealError::NotEnoughPlayers);
        }

        if hand_size == 0 {
            return Err(DealError::EmptyHand);
        }

        if hand_size * self.players.len() > self.deck.len() {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..hand_size {
            for player in &mut self.players {
                let card = self.deck.draw()?;
                player.receive(card);
            }
        }

        self.round += 1;
        tracing::info!(round = self.round, players = self.players.len(), "round started");
        tracing::debug!(
            hand_size,
            cards_remaining = self.deck.len(),
            "hands dealt"
        );

        self.current = 0;
        self.state = GameState::Betting;
        Ok(())
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the running total of the cards played this round.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` if no players are seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Passes the turn to the next player, wrapping after the last one.
    pub fn next_player(&mut self) {
        self.current += 1;

        if self.current >= self.players.len() {
            self.current = 0;
        }
    }

    /// Returns whether the session has ended.
    #[must_use]
    pub fn is_session_over(&self) -> bool {
        self.state == GameState::SessionOver
    }

    /// Returns the players ordered by chips, richest first. Ties keep turn
    /// order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.players.iter().collect();
        standings.sort_by(|a, b| b.chips().cmp(&a.chips()));
        standings
    }
}
