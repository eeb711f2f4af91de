use crate::card::Card;
use crate::error::PlayError;
use crate::result::RoundResult;

use super::{BUST_THRESHOLD, GameState, Table};

/// What happened after a card was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played and the next player is up.
    Played {
        /// The card that was played.
        card: Card,
        /// The running total after the play.
        total: u8,
    },
    /// The round has ended, either because the current player went over the
    /// threshold or because every hand is empty.
    RoundOver(RoundResult),
}

impl Table {
    /// Plays a card of `value` from the current player's hand.
    ///
    /// If the running total goes above [`BUST_THRESHOLD`], the current player
    /// loses their bet and the round ends. Otherwise the turn passes to the
    /// next player who still holds cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the play round, or if the
    /// current player holds no card of that value. Nothing changes in the
    /// latter case and the same player should try again.
    pub fn play(&mut self, value: u8) -> Result<PlayOutcome, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        let current = self.current;
        let player = self
            .players
            .get_mut(current)
            .ok_or(PlayError::InvalidState)?;
        let card = player.play(value).ok_or(PlayError::NotInHand(value))?;

        self.total += card.value();
        tracing::debug!(
            player = %player.name(),
            value,
            total = self.total,
            "card played"
        );

        if self.total > BUST_THRESHOLD {
            tracing::info!(player = %player.name(), total = self.total, "player busted");
            let bet = player.bet();
            let settlement = self.pay_out(current, bet);
            return Ok(PlayOutcome::RoundOver(self.finish_round(Some(settlement))));
        }

        if !self.advance_to_next_holder() {
            tracing::info!(total = self.total, "every hand is empty, nobody busted");
            for player in &mut self.players {
                player.clear_bet();
            }
            return Ok(PlayOutcome::RoundOver(self.finish_round(None)));
        }

        Ok(PlayOutcome::Played {
            card,
            total: self.total,
        })
    }

    /// Moves the turn to the next player who still holds cards.
    ///
    /// Returns `false` if every hand is empty.
    fn advance_to_next_holder(&mut self) -> bool {
        for _ in 0..self.players.len() {
            self.next_player();
            if self
                .current_player()
                .is_some_and(|player| !player.hand().is_empty())
            {
                return true;
            }
        }
        false
    }
}
