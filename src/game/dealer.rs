use log::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::player::{CardPlayer, Stands};
use crate::render;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::actions::announce;
use super::{GameState, TITLE_WIDTH, Table};

impl Table {
    /// Dealer plays their hand.
    ///
    /// The hole card is turned face up and moved to the front of the hand,
    /// then the dealer draws until the house total is reached or the hand
    /// busts. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe runs out.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, RoundError> {
        self.expect_state(GameState::DealerTurn)?;
        self.screen.show(&render::title("The dealer plays", TITLE_WIDTH));

        let hand = self.dealer.hand_mut();
        if let Some(at) = hand.face_down_position() {
            let mut hole = hand.draw_at(at)?;
            hole.reveal();
            hand.put_at(0, hole)?;
        }

        let mut drawn = Vec::new();
        loop {
            let total = self.dealer.total();
            self.screen
                .show(&format!("{} ({total})", render::player(&self.dealer)));
            let stands = self.dealer.stands()?;
            if stands {
                announce(self.screen.as_mut(), total, true, false);
                break;
            }
            let card = self.shoe.draw()?;
            self.dealer.hand_mut().put(card);
            drawn.push(card);
        }

        debug!(
            "dealer stands at {} after drawing {}",
            self.dealer.total(),
            drawn.len()
        );
        self.state = GameState::Payout;
        Ok(drawn)
    }

    /// Settles every bet against the dealer's total.
    ///
    /// A client wins when the dealer busts or when beating the dealer, and
    /// loses when busting or falling short. Equal totals push.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not at payout.
    pub fn settle(&mut self) -> Result<RoundResult, RoundError> {
        self.expect_state(GameState::Payout)?;

        let dealer_total = self.dealer.total();
        let dealer_bust = dealer_total > BLACKJACK;

        self.screen.clear();
        self.screen
            .show(&render::title("The dealer pays out", TITLE_WIDTH));
        let busted = if dealer_bust {
            format!(" {}", render::alert("BUSTED"))
        } else {
            String::new()
        };
        self.screen.show(&format!(
            "{} ({dealer_total}){busted}",
            render::player(&self.dealer)
        ));

        let mut players = Vec::with_capacity(self.players.len());
        for (player, &bet) in self.players.iter_mut().zip(&self.bets) {
            let total = player.total();
            let outcome = HandOutcome::settle(total, dealer_total);
            match outcome {
                HandOutcome::Win => player.win_chips(bet),
                HandOutcome::Lose => player.lose_chips(bet),
                HandOutcome::Push => {}
            }

            let line = match outcome {
                HandOutcome::Win if dealer_bust => {
                    format!("{} wins {bet} chips, the dealer busted!", player.name())
                }
                HandOutcome::Win => format!("{} wins {bet} chips!", player.name()),
                HandOutcome::Lose if total > BLACKJACK => {
                    format!("{} loses {bet} chips, busted!", player.name())
                }
                HandOutcome::Lose => {
                    format!("{} loses {bet} chips, the dealer wins!", player.name())
                }
                HandOutcome::Push => format!("{} pushes!", player.name()),
            };
            self.screen
                .show(&format!("{} {line}", render::client(player.as_ref())));
            debug!(
                "{} at {total} vs dealer {dealer_total}: {outcome:?} {bet}",
                player.name()
            );

            players.push(PlayerResult {
                name: player.name().to_owned(),
                bet,
                total,
                outcome,
                chips: player.chips(),
            });
        }
        self.screen.pause();

        self.state = GameState::Discard;
        Ok(RoundResult {
            players,
            dealer_total,
            dealer_bust,
            eliminated: Vec::new(),
        })
    }
}
