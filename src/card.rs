//! Card types.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;

/// Lowest valid rank (Ace).
pub const ACE: u8 = 1;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// Highest valid rank (King).
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// Suits are numbered 1 to 4 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts (1).
    Hearts,
    /// Diamonds (2).
    Diamonds,
    /// Clubs (3).
    Clubs,
    /// Spades (4).
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit numbered `index` (1..=4).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `index` is outside 1..=4.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Diamonds),
            3 => Ok(Self::Clubs),
            4 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Returns the suit number (1..=4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns whether the suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        }
    }
}

/// A playing card.
///
/// Two cards are equal when rank and suit match; whether a card lies face
/// up or face down does not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a face-up card from a rank (1 = Ace .. 13 = King) and a suit
    /// number (1..=4).
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] if either value is out of range.
    pub const fn new(rank: u8, suit: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        match Suit::from_index(suit) {
            Ok(suit) => Ok(Self {
                rank,
                suit,
                face_up: true,
            }),
            Err(err) => Err(err),
        }
    }

    /// Creates a face-up card of the given suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside 1..=13.
    pub const fn of(suit: Suit, rank: u8) -> Result<Self, CardError> {
        Self::new(rank, suit.index())
    }

    // Callers guarantee `rank` is within ACE..=KING.
    pub(crate) const fn from_parts(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// The rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card lies face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn hide(&mut self) {
        self.face_up = false;
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Returns whether the card is black.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        !self.suit.is_red()
    }

    /// Returns the rank glyph (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_glyph(&self) -> &'static str {
        const GLYPHS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        GLYPHS[(self.rank - 1) as usize]
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "[{}{}]", self.rank_glyph(), self.suit.glyph())
        } else {
            f.write_str("[##]")
        }
    }
}
