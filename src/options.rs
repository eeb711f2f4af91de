//! Session configuration options.

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use nimzero::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(250)
///     .with_rounds(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Chips each player starts the session with.
    pub starting_chips: u32,
    /// Cards dealt to each player per round.
    pub hand_size: usize,
    /// Number of rounds before the session ends.
    pub rounds: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            hand_size: 4,
            rounds: 3,
        }
    }
}

impl TableOptions {
    /// Sets the starting chips.
    ///
    /// # Example
    ///
    /// ```
    /// use nimzero::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(50);
    /// assert_eq!(options.starting_chips, 50);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use nimzero::TableOptions;
    ///
    /// let options = TableOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of rounds in the session.
    ///
    /// # Example
    ///
    /// ```
    /// use nimzero::TableOptions;
    ///
    /// let options = TableOptions::default().with_rounds(1);
    /// assert_eq!(options.rounds, 1);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}
