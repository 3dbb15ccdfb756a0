//! Table configuration options.

use crate::deck::SHOE_DECKS;
use crate::player::DEALER_STANDS_ON;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use croupier::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(4)
///     .with_cut_after_shuffle(true)
///     .with_max_rounds(Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Total the dealer stands on.
    pub dealer_stands_on: u8,
    /// Maximum number of seated clients.
    pub max_players: usize,
    /// Whether the shoe is cut after every pre-round shuffle.
    pub cut_after_shuffle: bool,
    /// Stop after this many rounds. `None` plays until every client is out.
    pub max_rounds: Option<u32>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: SHOE_DECKS,
            dealer_stands_on: DEALER_STANDS_ON,
            max_players: 7,
            cut_after_shuffle: false,
            max_rounds: None,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the total the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the maximum number of seated clients.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets whether the shoe is cut after shuffling.
    #[must_use]
    pub const fn with_cut_after_shuffle(mut self, cut: bool) -> Self {
        self.cut_after_shuffle = cut;
        self
    }

    /// Sets the round limit.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_rounds(Some(3));
    /// assert_eq!(options.max_rounds, Some(3));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: Option<u32>) -> Self {
        self.max_rounds = rounds;
        self
    }
}
