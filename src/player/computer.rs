use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::PromptError;
use crate::hand::BLACKJACK;

use super::{Bets, CardPlayer, Seat, Stands};

/// Most conservative personality.
pub const CALM: u8 = 1;
/// Most reckless personality.
pub const WILD: u8 = 100;

/// Below this total a computer always draws.
const THINKING_TOTAL: u8 = 15;

/// A computer-controlled client.
///
/// Its personality, fixed at creation, is compared against a fresh random
/// "thought" in `CALM..=WILD` for every choice: a thought below the
/// personality means betting big and drawing again.
#[derive(Debug, Clone)]
pub struct Computer {
    seat: Seat,
    personality: u8,
    rng: ChaCha8Rng,
}

impl Computer {
    /// Seats a computer with a random personality drawn from `seed`.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let personality = rng.random_range(CALM..=WILD);
        Self {
            seat: Seat::new(name, chips),
            personality,
            rng,
        }
    }

    /// Seats a computer with a chosen personality, clamped to `CALM..=WILD`.
    #[must_use]
    pub fn with_personality(
        name: impl Into<String>,
        chips: u32,
        personality: u8,
        seed: u64,
    ) -> Self {
        Self {
            seat: Seat::new(name, chips),
            personality: personality.clamp(CALM, WILD),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The personality in `CALM..=WILD`.
    #[must_use]
    pub const fn personality(&self) -> u8 {
        self.personality
    }

    fn think(&mut self) -> u8 {
        self.rng.random_range(CALM..=WILD)
    }
}

impl CardPlayer for Computer {
    fn name(&self) -> &str {
        &self.seat.name
    }

    fn hand(&self) -> &Deck {
        &self.seat.hand
    }

    fn hand_mut(&mut self) -> &mut Deck {
        &mut self.seat.hand
    }
}

impl Stands for Computer {
    fn stands(&mut self) -> Result<bool, PromptError> {
        let total = self.total();
        if total >= BLACKJACK {
            return Ok(true);
        }
        if total < THINKING_TOTAL {
            return Ok(false);
        }
        Ok(self.think() >= self.personality)
    }
}

impl Bets for Computer {
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
        let chips = self.seat.chips.max(1);
        // Halves collapse to 1 for very short stacks; a bet is never 0.
        let half = (chips / 2).max(1);
        let amount = if self.think() < self.personality {
            self.rng.random_range(half..=chips)
        } else {
            self.rng.random_range(1..=half)
        };
        Ok(amount)
    }
}
