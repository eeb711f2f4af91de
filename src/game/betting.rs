use crate::action::BetAction;
use crate::error::BetError;

use super::{BettingPhase, GameState, Table};

/// What happened after a betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    /// The bet was recorded and the next player is up.
    Continue,
    /// Everyone matched the highest bet or is all in; the play round begins.
    Settled,
    /// Folding is not supported yet. Nothing changed and the same player
    /// must choose again.
    FoldUnsupported,
}

impl Table {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }
        Ok(())
    }

    /// Returns the progress of the betting round.
    #[must_use]
    pub const fn betting_phase(&self) -> BettingPhase {
        self.betting
    }

    /// Returns the bet every player has to match, if the betting is open.
    #[must_use]
    pub const fn highest_bet(&self) -> Option<u32> {
        self.betting.highest_bet()
    }

    /// Returns whether every player has bet `highest_bet` or gone all in.
    ///
    /// Always `false` while no bet has been placed.
    #[must_use]
    pub fn bets_settled(&self, highest_bet: Option<u32>) -> bool {
        let Some(highest_bet) = highest_bet else {
            return false;
        };

        self.players
            .iter()
            .all(|player| player.bet() == highest_bet || player.is_all_in())
    }

    /// Places the opening bet for the current player.
    ///
    /// A bet of zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, the betting is already
    /// open, or the player lacks chips.
    pub fn open_bet(&mut self, amount: u32) -> Result<BetOutcome, BetError> {
        self.ensure_betting()?;

        if self.betting != BettingPhase::AwaitingFirstBet {
            return Err(BetError::AlreadyOpened);
        }

        let current = self.current;
        let player = self
            .players
            .get_mut(current)
            .ok_or(BetError::InvalidState)?;
        player.place_bet(amount)?;

        tracing::debug!(player = %player.name(), amount, "opening bet");

        self.betting = BettingPhase::AwaitingCalls {
            highest_bet: amount,
        };
        Ok(self.advance_betting(amount))
    }

    /// Answers the highest bet for the current player.
    ///
    /// [`BetAction::Fold`] is accepted but does nothing: the bet stays as it
    /// was and the turn does not move.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, nobody has opened yet,
    /// or a raise is below the highest bet or above the player's chips.
    pub fn act(&mut self, action: BetAction) -> Result<BetOutcome, BetError> {
        self.ensure_betting()?;

        let BettingPhase::AwaitingCalls { highest_bet } = self.betting else {
            return Err(BetError::NotOpened);
        };

        let current = self.current;
        let player = self
            .players
            .get_mut(current)
            .ok_or(BetError::InvalidState)?;

        let highest_bet = match action {
            BetAction::Call => {
                player.call(highest_bet);
                tracing::debug!(
                    player = %player.name(),
                    bet = player.bet(),
                    all_in = player.is_all_in(),
                    "call"
                );
                highest_bet
            }
            BetAction::Raise(amount) => {
                if amount > player.chips() {
                    return Err(BetError::InsufficientChips);
                }
                if amount < highest_bet {
                    return Err(BetError::BelowHighestBet);
                }
                player.place_bet(amount)?;
                tracing::debug!(player = %player.name(), amount, "raise");
                amount
            }
            BetAction::Fold => {
                tracing::warn!(player = %player.name(), "fold requested but not supported");
                return Ok(BetOutcome::FoldUnsupported);
            }
        };

        self.betting = BettingPhase::AwaitingCalls { highest_bet };
        Ok(self.advance_betting(highest_bet))
    }

    /// Moves the turn on and starts the play round once bets are settled.
    fn advance_betting(&mut self, highest_bet: u32) -> BetOutcome {
        self.next_player();

        if !self.bets_settled(Some(highest_bet)) {
            return BetOutcome::Continue;
        }

        tracing::debug!(highest_bet, "bets settled");
        self.betting = BettingPhase::Settled { highest_bet };
        self.state = GameState::Playing;
        self.current = 0;
        BetOutcome::Settled
    }
}
