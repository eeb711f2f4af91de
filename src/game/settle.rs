use alloc::vec::Vec;

use crate::error::SettleError;
use crate::result::{RoundResult, SessionEnd, Settlement};

use super::{GameState, Table};

impl Table {
    /// Takes the loser's bet and shares it among the other players.
    ///
    /// Each other player receives `bet / (players - 1)`, rounded down. The
    /// remainder is not paid to anyone and is reported as
    /// [`Settlement::forfeited`]. Every bet and all-in flag is cleared
    /// afterwards, the loser's included.
    ///
    /// # Errors
    ///
    /// Returns an error if `loser` is not a seated player.
    pub fn settle_bets(&mut self, loser: usize) -> Result<Settlement, SettleError> {
        let amount = self
            .players
            .get(loser)
            .ok_or(SettleError::PlayerNotFound)?
            .bet();

        Ok(self.pay_out(loser, amount))
    }

    /// Moves `amount` from the seat at `loser` to everyone else and clears
    /// all bets.
    pub(super) fn pay_out(&mut self, loser: usize, amount: u32) -> Settlement {
        let others = u32::try_from(self.players.len().saturating_sub(1)).unwrap_or(u32::MAX);
        let share = amount.checked_div(others).unwrap_or(0);
        let forfeited = amount - share * others;

        for (index, player) in self.players.iter_mut().enumerate() {
            if index == loser {
                player.lose(amount);
            } else {
                player.win(share);
            }
            player.clear_bet();
        }

        tracing::info!(loser, amount, share, forfeited, "bets settled");

        Settlement {
            loser,
            amount,
            share,
            forfeited,
        }
    }

    /// Closes the round and decides whether the session goes on.
    pub(super) fn finish_round(&mut self, settlement: Option<Settlement>) -> RoundResult {
        let bankrupt = self.players.iter().position(|player| player.chips() == 0);

        let session_end = if let Some(player) = bankrupt {
            Some(SessionEnd::Bankrupt { player })
        } else if self.round >= self.options.rounds {
            Some(SessionEnd::RoundLimit)
        } else {
            None
        };

        self.state = if session_end.is_some() {
            GameState::SessionOver
        } else {
            GameState::RoundOver
        };

        if let Some(end) = session_end {
            tracing::info!(round = self.round, ?end, "session over");
        }

        RoundResult {
            round: self.round,
            total: self.total,
            settlement,
            chips: self.players.iter().map(|player| player.chips()).collect::<Vec<_>>(),
            session_end,
        }
    }
}
