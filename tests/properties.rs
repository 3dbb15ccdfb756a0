//! Property tests for cards, shuffling, scoring and computer bets.

use croupier::hand::{self, BLACKJACK, card_value};
use croupier::{Bets, Card, Computer, Deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn any_card()(rank in 1u8..=13, suit in 1u8..=4) -> Card {
        Card::new(rank, suit).unwrap()
    }
}

/// Best total found by trying every number of aces counted high.
fn best_total(cards: &[Card]) -> u32 {
    let aces = cards.iter().filter(|card| card.is_ace()).count() as u32;
    let low: u32 = cards.iter().map(|card| u32::from(card_value(card.rank()))).sum();

    (0..=aces)
        .map(|high| low + 10 * high)
        .filter(|&total| total <= u32::from(BLACKJACK))
        .max()
        .unwrap_or(low)
}

fn sorted(deck: &Deck) -> Vec<(u8, u8)> {
    let mut keys: Vec<_> = deck
        .iter()
        .map(|card| (card.rank(), card.suit().index()))
        .collect();
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn valid_cards_keep_rank_and_suit(rank in 1u8..=13, suit in 1u8..=4) {
        let card = Card::new(rank, suit).unwrap();
        prop_assert_eq!(card.rank(), rank);
        prop_assert_eq!(card.suit().index(), suit);
        prop_assert!(card.is_face_up());
    }

    #[test]
    fn out_of_range_cards_are_rejected(rank in 14u8.., suit in 5u8..) {
        prop_assert!(Card::new(rank, 1).is_err());
        prop_assert!(Card::new(1, suit).is_err());
        prop_assert!(Card::new(0, 1).is_err());
        prop_assert!(Card::new(1, 0).is_err());
    }

    #[test]
    fn shuffle_keeps_every_card(seed in any::<u64>(), decks in 1u8..=6) {
        let mut shoe = Deck::shoe(decks, false);
        let before = sorted(&shoe);
        shoe.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(sorted(&shoe), before);
    }

    #[test]
    fn cut_keeps_every_card(seed in any::<u64>()) {
        let mut deck = Deck::standard(false);
        let before = sorted(&deck);
        let at = deck.cut(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        prop_assert!(at < deck.len());
        prop_assert_eq!(sorted(&deck), before);
    }

    #[test]
    fn total_is_the_best_ace_assignment(cards in prop::collection::vec(any_card(), 0..12)) {
        let total = hand::total(&cards);
        prop_assert_eq!(u32::from(total), best_total(&cards));
        prop_assert_eq!(hand::is_bust(&cards), total > BLACKJACK);
    }

    #[test]
    fn computer_bets_within_its_chips(seed in any::<u64>(), chips in 1u32..100_000) {
        let mut computer = Computer::new("Batman", chips, seed);
        for _ in 0..8 {
            let bet = computer.bet().unwrap();
            prop_assert!((1..=chips).contains(&bet));
        }
    }
}
