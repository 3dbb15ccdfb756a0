//! Round result types for payout.

use crate::hand::BLACKJACK;

/// Result of a client's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Client wins the bet.
    Win,
    /// Client loses the bet.
    Lose,
    /// Tie, no chips change hands.
    Push,
}

impl HandOutcome {
    /// Settles a client total against the dealer total.
    ///
    /// A busted client always loses, even when the dealer busts too.
    #[must_use]
    pub const fn settle(player_total: u8, dealer_total: u8) -> Self {
        if player_total > BLACKJACK {
            Self::Lose
        } else if dealer_total > BLACKJACK || player_total > dealer_total {
            Self::Win
        } else if player_total < dealer_total {
            Self::Lose
        } else {
            Self::Push
        }
    }
}

/// Result for a single client after payout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Client name.
    pub name: String,
    /// Amount bet this round.
    pub bet: u32,
    /// The client's final total.
    pub total: u8,
    /// The outcome.
    pub outcome: HandOutcome,
    /// Chips held after payout.
    pub chips: u32,
}

impl PlayerResult {
    /// Net chip change for the round.
    #[must_use]
    pub fn net(&self) -> i64 {
        match self.outcome {
            HandOutcome::Win => i64::from(self.bet),
            HandOutcome::Lose => -i64::from(self.bet),
            HandOutcome::Push => 0,
        }
    }
}

/// Result of a whole round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each client, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Names of clients who left the table with no chips.
    pub eliminated: Vec<String>,
}
