use crate::deck::Deck;
use crate::error::PromptError;
use crate::hand::BLACKJACK;

use super::{CardPlayer, Stands};

/// Total the dealer stands on by default.
pub const DEALER_STANDS_ON: u8 = 17;

/// The house. Draws until reaching a fixed total; never bets.
#[derive(Debug, Clone)]
pub struct Dealer {
    name: String,
    hand: Deck,
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer who stands on 17 or more.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stands_on(DEALER_STANDS_ON)
    }

    /// Creates a dealer who stands on `total` or more.
    #[must_use]
    pub fn with_stands_on(total: u8) -> Self {
        Self {
            name: "Dealer".to_owned(),
            hand: Deck::new(),
            stands_on: total,
        }
    }

    /// Total the dealer stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// The fixed house policy for a given total.
    #[must_use]
    pub const fn stands_at(&self, total: u8) -> bool {
        total > BLACKJACK || total >= self.stands_on
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPlayer for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Deck {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }
}

impl Stands for Dealer {
    fn stands(&mut self) -> Result<bool, PromptError> {
        Ok(self.stands_at(self.total()))
    }
}
