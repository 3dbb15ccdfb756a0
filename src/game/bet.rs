use log::debug;

use crate::error::RoundError;
use crate::player::CardPlayer;
use crate::render;

use super::{GameState, TITLE_WIDTH, Table};

impl Table {
    /// Asks every client for a bet, in seating order.
    ///
    /// The bets of the previous round are discarded first.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, a client's input fails, or
    /// a client offers a bet outside `1..=chips`.
    pub fn collect_bets(&mut self) -> Result<(), RoundError> {
        self.expect_state(GameState::Betting)?;
        self.bets.clear();

        self.screen.clear();
        self.screen.show(&render::title("Players bet", TITLE_WIDTH));
        self.screen.show(&render::player(&self.dealer));

        for player in &mut self.players {
            self.screen.show(&render::client(player.as_ref()));
            let amount = player.bet()?;
            let chips = player.chips();
            if amount == 0 || amount > chips {
                return Err(RoundError::InvalidBet { amount, chips });
            }
            if !player.is_interactive() {
                self.screen.show(&format!("Chips to bet: {amount}"));
                self.screen.pause();
            }
            debug!("{} bets {amount} of {chips}", player.name());
            self.bets.push(amount);
        }

        self.state = GameState::Dealing;
        Ok(())
    }

    /// Deals two cards to each client from the top of the shoe, then the
    /// dealer's face-down hole card and face-up card.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not dealing or the shoe runs out.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.expect_state(GameState::Dealing)?;
        self.screen
            .show(&render::title("The dealer deals two cards", TITLE_WIDTH));

        for player in &mut self.players {
            for _ in 0..2 {
                let card = self.shoe.draw()?;
                player.hand_mut().put(card);
            }
        }

        let mut hole = self.shoe.draw()?;
        hole.hide();
        self.dealer.hand_mut().put(hole);
        let up = self.shoe.draw()?;
        self.dealer.hand_mut().put(up);

        debug!("dealt, {} cards left in the shoe", self.shoe.len());
        self.state = GameState::PlayerTurns;
        Ok(())
    }
}
