use crate::console::Prompt;
use crate::deck::Deck;
use crate::error::PromptError;
use crate::hand::BLACKJACK;

use super::{Bets, CardPlayer, Seat, Stands};

/// A person playing through a [`Prompt`].
///
/// Bust and 21 stand automatically; otherwise the person is asked.
#[derive(Debug)]
pub struct Human<P> {
    seat: Seat,
    prompt: P,
}

impl<P: Prompt> Human<P> {
    /// Seats a person with `chips` chips.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: u32, prompt: P) -> Self {
        Self {
            seat: Seat::new(name, chips),
            prompt,
        }
    }
}

impl<P: Prompt> CardPlayer for Human<P> {
    fn name(&self) -> &str {
        &self.seat.name
    }

    fn hand(&self) -> &Deck {
        &self.seat.hand
    }

    fn hand_mut(&mut self) -> &mut Deck {
        &mut self.seat.hand
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

impl<P: Prompt> Stands for Human<P> {
    fn stands(&mut self) -> Result<bool, PromptError> {
        if self.total() >= BLACKJACK {
            return Ok(true);
        }
        self.prompt.confirm("Stand?")
    }
}

impl<P: Prompt> Bets for Human<P> {
    fn chips(&self) -> u32 {
        self.seat.chips
    }

    fn win_chips(&mut self, amount: u32) {
        self.seat.win(amount);
    }

    fn lose_chips(&mut self, amount: u32) {
        self.seat.lose(amount);
    }

    fn bet(&mut self) -> Result<u32, PromptError> {
        let chips = self.seat.chips;
        self.prompt.read_integer("Chips to bet: ", 1, chips)
    }
}
