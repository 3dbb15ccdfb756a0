//! Blackjack hand totals.
//!
//! Aces count as 11 or 1. The total only ever considers one ace high
//! with the rest low, or every ace low: two aces at 11 already make 22, so
//! no better total exists.

use crate::card::{ACE, Card};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

const ACE_HIGH: u8 = 11;

/// Value of a non-ace card: face cards and tens count 10.
///
/// Aces return 1; [`total`] decides when an ace counts 11.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 1,
        2..=9 => rank,
        _ => 10,
    }
}

/// Computes the best blackjack total of `cards`.
///
/// Face-down cards are counted too; callers decide what is visible.
#[must_use]
pub fn total<'a, I>(cards: I) -> u8
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut aces: u8 = 0;
    let mut base: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        } else {
            base = base.saturating_add(card_value(card.rank()));
        }
    }

    match aces {
        0 => base,
        _ => {
            let one_high = base.saturating_add(ACE_HIGH).saturating_add(aces - 1);
            if one_high > BLACKJACK {
                base.saturating_add(aces)
            } else {
                one_high
            }
        }
    }
}

/// Returns whether `cards` total more than 21.
#[must_use]
pub fn is_bust<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    total(cards) > BLACKJACK
}
