//! Table participants.
//!
//! Capabilities are split into traits: every participant is a
//! [`CardPlayer`] holding a hand, [`Stands`] decides when to stop drawing
//! and [`Bets`] handles chips. The dealer only stands; a [`Client`] does
//! both.

use crate::deck::Deck;
use crate::error::PromptError;
use crate::hand;

mod computer;
mod dealer;
mod human;

pub use computer::{CALM, Computer, WILD};
pub use dealer::{DEALER_STANDS_ON, Dealer};
pub use human::Human;

/// Anyone holding cards at the table.
pub trait CardPlayer {
    /// Display name.
    fn name(&self) -> &str;

    /// Cards currently held.
    fn hand(&self) -> &Deck;

    /// Mutable access to the held cards.
    fn hand_mut(&mut self) -> &mut Deck;

    /// Best blackjack total of the hand.
    fn total(&self) -> u8 {
        hand::total(self.hand())
    }

    /// Whether decisions come from a person at the console.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// A participant that decides between standing and hitting.
pub trait Stands: CardPlayer {
    /// Returns `true` to stand on the current hand, `false` to draw.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if an interactive decision cannot be read.
    fn stands(&mut self) -> Result<bool, PromptError>;
}

/// A participant holding chips.
pub trait Bets: CardPlayer {
    /// Chips currently held.
    fn chips(&self) -> u32;

    /// Adds winnings.
    fn win_chips(&mut self, amount: u32);

    /// Removes a lost bet.
    fn lose_chips(&mut self, amount: u32);

    /// Chooses the bet for the next round, between 1 and [`Bets::chips`].
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if an interactive bet cannot be read.
    fn bet(&mut self) -> Result<u32, PromptError>;
}

/// A betting player seated against the dealer.
pub trait Client: Stands + Bets {}

impl<T: Stands + Bets + ?Sized> Client for T {}

/// Name, hand and chips shared by every client kind.
#[derive(Debug, Clone)]
pub(crate) struct Seat {
    pub(crate) name: String,
    pub(crate) hand: Deck,
    pub(crate) chips: u32,
}

impl Seat {
    pub(crate) fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            hand: Deck::new(),
            chips,
        }
    }

    pub(crate) const fn win(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) const fn lose(&mut self, amount: u32) {
        self.chips = self.chips.saturating_sub(amount);
    }
}
