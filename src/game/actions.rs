use log::debug;

use crate::console::Screen;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::render;

use super::{GameState, TITLE_WIDTH, Table};

impl Table {
    /// Lets each client draw from the top of the shoe until standing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the clients' turn, a client's input
    /// fails, or the shoe runs out.
    pub fn play_clients(&mut self) -> Result<(), RoundError> {
        self.expect_state(GameState::PlayerTurns)?;
        self.screen.show(&render::title("Players play", TITLE_WIDTH));
        self.screen.show(&render::player(&self.dealer));

        for player in &mut self.players {
            loop {
                self.screen.show(&render::client(player.as_ref()));
                let total = player.total();
                let stands = player.stands()?;
                announce(self.screen.as_mut(), total, stands, player.is_interactive());
                debug!("{} at {total} stands: {stands}", player.name());
                if stands {
                    break;
                }
                let card = self.shoe.draw()?;
                player.hand_mut().put(card);
            }
        }

        self.state = GameState::DealerTurn;
        Ok(())
    }
}

/// Echoes a decision the user did not type.
pub(super) fn announce(screen: &mut dyn Screen, total: u8, stands: bool, interactive: bool) {
    if total > BLACKJACK {
        screen.show(&render::alert("Busted"));
    } else if !interactive || total == BLACKJACK {
        let answer = if stands { "Y" } else { "N" };
        screen.show(&format!("Stand? [Y/N]: {answer}"));
    } else {
        return;
    }
    screen.pause();
}
