//! Ordered card collections used both as the shoe and as hands.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// Number of standard decks in a blackjack shoe.
pub const SHOE_DECKS: u8 = 6;

/// An ordered pile of cards.
///
/// Index 0 is the top of the deck: [`Deck::draw`] takes from there and
/// [`Deck::put`] appends to the bottom. Duplicates are allowed, since a
/// multi-deck shoe holds several copies of every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding one ordered set of 52 cards.
    #[must_use]
    pub fn standard(face_down: bool) -> Self {
        let mut deck = Self::new();
        deck.fill(face_down);
        deck
    }

    /// Creates an unshuffled shoe of `decks` ordered sets.
    #[must_use]
    pub fn shoe(decks: u8, face_down: bool) -> Self {
        let mut deck = Self::new();
        deck.fill_decks(decks, face_down);
        deck
    }

    /// Replaces the contents with one ordered set of 52 cards.
    ///
    /// Cards are rank-major then suit-major: every suit of the ace, then
    /// every suit of the two, and so on up to the king.
    pub fn fill(&mut self, face_down: bool) {
        self.fill_decks(1, face_down);
    }

    /// Replaces the contents with `decks` consecutive ordered sets.
    pub fn fill_decks(&mut self, decks: u8, face_down: bool) {
        self.cards.clear();
        self.cards.reserve(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for rank in ACE..=KING {
                for suit in Suit::ALL {
                    let mut card = Card::from_parts(suit, rank);
                    if face_down {
                        card.hide();
                    }
                    self.cards.push(card);
                }
            }
        }
    }

    /// Appends a card to the bottom of the deck.
    pub fn put(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Inserts a card at `index`, shifting later cards down.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is past the end.
    pub fn put_at(&mut self, index: usize, card: Card) -> Result<(), DeckError> {
        if index > self.cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        self.cards.insert(index, card);
        Ok(())
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards, or
    /// [`DeckError::IndexOutOfRange`] if `index` is past the last card.
    pub fn draw_at(&mut self, index: usize) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        if index >= self.cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Puts the cards in uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Cuts the deck at a uniformly random position.
    ///
    /// The cards above the cut point move to the bottom. Returns the cut
    /// point.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards.
    pub fn cut<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let at = rng.random_range(0..self.cards.len());
        self.cards.rotate_left(at);
        Ok(at)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards, top first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the position of the first face-down card.
    #[must_use]
    pub fn face_down_position(&self) -> Option<usize> {
        self.cards.iter().position(|card| !card.is_face_up())
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
