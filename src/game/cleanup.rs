use log::info;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::CardPlayer;
use crate::render;

use super::{GameState, TITLE_WIDTH, Table};

/// Moves every card of `hand` face up to the bottom of `shoe`.
fn return_hand(hand: &mut Deck, shoe: &mut Deck) {
    while let Ok(mut card) = hand.draw() {
        card.reveal();
        shoe.put(card);
    }
}

impl Table {
    /// Returns every hand, clients first, to the bottom of the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not discarding.
    pub fn discard(&mut self) -> Result<(), RoundError> {
        self.expect_state(GameState::Discard)?;
        self.return_cards();
        self.state = GameState::Elimination;
        Ok(())
    }

    pub(super) fn return_cards(&mut self) {
        for player in &mut self.players {
            return_hand(player.hand_mut(), &mut self.shoe);
        }
        return_hand(self.dealer.hand_mut(), &mut self.shoe);
    }

    /// Removes every client left without chips and closes the round.
    /// Returns the names of the clients who left.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not at elimination.
    pub fn eliminate(&mut self) -> Result<Vec<String>, RoundError> {
        self.expect_state(GameState::Elimination)?;

        let (staying, leaving): (Vec<_>, Vec<_>) = core::mem::take(&mut self.players)
            .into_iter()
            .partition(|player| player.chips() > 0);
        self.players = staying;

        self.screen.clear();
        self.screen
            .show(&render::title("Players leave", TITLE_WIDTH));
        let names: Vec<String> = leaving
            .iter()
            .map(|player| player.name().to_owned())
            .collect();
        for name in &names {
            info!("{name} leaves the table");
            self.screen.show(&format!("{name} leaves the game"));
        }
        if !names.is_empty() {
            self.screen.pause();
        }

        self.bets.clear();
        self.state = GameState::WaitingForPlayers;
        Ok(names)
    }
}
