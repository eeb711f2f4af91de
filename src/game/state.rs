//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Seating players before the first round.
    WaitingForPlayers,
    /// A fresh deck is ready and hands are about to be dealt.
    Dealing,
    /// Players are betting.
    Betting,
    /// Players are taking turns playing cards.
    Playing,
    /// The round has been settled; another round may start.
    RoundOver,
    /// The session has ended.
    SessionOver,
}

/// Progress of the betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BettingPhase {
    /// Nobody has bet yet.
    AwaitingFirstBet,
    /// The opening bet is in; the others must call or raise.
    AwaitingCalls {
        /// The bet everyone else has to match.
        highest_bet: u32,
    },
    /// Every player matched the highest bet or went all in.
    Settled {
        /// The bet that was matched.
        highest_bet: u32,
    },
}

impl BettingPhase {
    /// Returns the highest bet, if the betting has been opened.
    #[must_use]
    pub const fn highest_bet(self) -> Option<u32> {
        match self {
            Self::AwaitingFirstBet => None,
            Self::AwaitingCalls { highest_bet } | Self::Settled { highest_bet } => {
                Some(highest_bet)
            }
        }
    }
}
