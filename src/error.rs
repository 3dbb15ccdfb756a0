//! Error types for table operations.

use thiserror::Error;

/// Errors raised when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Suit outside 1..=4.
    #[error("invalid suit {0}, expected 1..=4")]
    InvalidSuit(u8),
}

/// Errors raised by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards.
    #[error("the deck is empty")]
    Empty,
    /// Position past the end of the deck.
    #[error("index {index} out of range for a deck of {len} cards")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Deck length at the time of the request.
        len: usize,
    },
}

/// Errors raised when seating a client at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Client has an empty name.
    #[error("client has no name")]
    EmptyName,
    /// Client has no chips to bet.
    #[error("client has no chips")]
    NoChips,
    /// All seats are taken.
    #[error("the table is full")]
    TableFull,
    /// A round is in progress.
    #[error("cannot seat a client during a round")]
    InvalidState,
}

/// Errors raised while reading from the input collaborator.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended.
    #[error("input closed")]
    Closed,
    /// Reading failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// No clients are seated.
    #[error("no clients at the table")]
    NoPlayers,
    /// A client bet outside 1..=chips.
    #[error("bet of {amount} is outside 1..={chips}")]
    InvalidBet {
        /// Amount offered.
        amount: u32,
        /// Chips held by the client.
        chips: u32,
    },
    /// A draw was attempted on an empty shoe.
    #[error("the shoe ran out of cards")]
    ShoeExhausted,
    /// A client's input failed.
    #[error(transparent)]
    Input(#[from] PromptError),
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::ShoeExhausted,
            DeckError::IndexOutOfRange { .. } => Self::InvalidState,
        }
    }
}
