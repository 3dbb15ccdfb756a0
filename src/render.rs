//! Colored text rendering for the console.
//!
//! Rendering never affects play. With colors disabled the output matches
//! the plain `Display` implementations.

use colored::{ColoredString, Colorize};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand;
use crate::player::{Bets, CardPlayer};

fn frame(text: &str) -> ColoredString {
    text.truecolor(175, 95, 215)
}

fn back(text: &str) -> ColoredString {
    text.truecolor(255, 135, 0)
}

/// Renders a single card, showing its back when face down.
#[must_use]
pub fn card(card: &Card) -> String {
    let (rank, suit) = if card.is_face_up() {
        let suit = if card.is_red() {
            card.suit().glyph().red()
        } else {
            card.suit().glyph().white()
        };
        (card.rank_glyph().white(), suit)
    } else {
        (back("#"), back("#"))
    };
    format!("{}{rank}{suit}{}", frame("["), frame("]"))
}

/// Renders every card of a hand or deck in order.
#[must_use]
pub fn cards(deck: &Deck) -> String {
    deck.iter().map(card).collect()
}

/// Renders a player's name and hand.
#[must_use]
pub fn player<P: CardPlayer + ?Sized>(player: &P) -> String {
    format!("{} {}", player.name(), cards(player.hand()))
}

/// Renders a client's name, hand, chips and total.
#[must_use]
pub fn client<C: Bets + ?Sized>(client: &C) -> String {
    format!(
        "{} ${} ({})",
        player(client),
        client.chips(),
        hand::total(client.hand())
    )
}

/// Renders a banner title across `width` columns.
#[must_use]
pub fn title(text: &str, width: usize) -> String {
    let rule = "-".repeat(width);
    format!("{rule}\n{:^width$}\n{rule}", text.to_uppercase())
}

/// Renders a warning such as a bust.
#[must_use]
pub fn alert(text: &str) -> String {
    text.red().to_string()
}
