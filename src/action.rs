//! Betting actions.

use core::str::FromStr;

use crate::error::ParseActionError;

/// An answer to the opening bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetAction {
    /// Match the highest bet, or go all in when short of chips.
    Call,
    /// Raise the highest bet to the given amount.
    Raise(u32),
    /// Fold. Accepted but not supported yet; it has no effect.
    Fold,
}

impl FromStr for BetAction {
    type Err = ParseActionError;

    /// Parses `call`, `fold` or `raise <amount>`, with `c`, `f` and `r` as
    /// short forms. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words.next().ok_or(ParseActionError::Unknown)?;

        let action = if keyword.eq_ignore_ascii_case("call") || keyword.eq_ignore_ascii_case("c") {
            Self::Call
        } else if keyword.eq_ignore_ascii_case("fold") || keyword.eq_ignore_ascii_case("f") {
            Self::Fold
        } else if keyword.eq_ignore_ascii_case("raise") || keyword.eq_ignore_ascii_case("r") {
            let amount = words.next().ok_or(ParseActionError::MissingAmount)?;
            let amount = amount
                .parse()
                .map_err(|_| ParseActionError::InvalidAmount)?;
            Self::Raise(amount)
        } else {
            return Err(ParseActionError::Unknown);
        };

        if words.next().is_some() {
            return Err(ParseActionError::Unknown);
        }

        Ok(action)
    }
}
