//! Table engine and round flow.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{Screen, Silent};
use crate::deck::Deck;
use crate::error::{RoundError, SeatError};
use crate::options::TableOptions;
use crate::player::{CardPlayer, Client, Dealer};
use crate::result::RoundResult;

mod actions;
mod bet;
mod cleanup;
mod dealer;
pub mod state;

pub use state::GameState;

/// Width of the phase banners.
const TITLE_WIDTH: usize = 80;

/// A blackjack table: the shoe, the dealer and the seated clients.
///
/// The shoe is filled once, when the table is built. Cards in play always
/// return to it at the end of a round, so its size only drops while hands
/// are out.
pub struct Table {
    options: TableOptions,
    shoe: Deck,
    dealer: Dealer,
    players: Vec<Box<dyn Client>>,
    /// Bets for the current round, parallel to `players`.
    bets: Vec<u32>,
    state: GameState,
    rounds: u32,
    rng: ChaCha8Rng,
    screen: Box<dyn Screen>,
}

impl Table {
    /// Creates a table with a fresh, unshuffled shoe.
    ///
    /// `seed` drives every shuffle and cut.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::{Computer, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default().with_max_rounds(Some(3)), 42);
    /// table.join(Computer::new("Batman", 100, 7)).unwrap();
    /// let rounds = table.play().unwrap();
    /// assert!(rounds <= 3);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = Deck::shoe(options.decks, false);
        let dealer = Dealer::with_stands_on(options.dealer_stands_on);

        Self {
            options,
            shoe,
            dealer,
            players: Vec::new(),
            bets: Vec::new(),
            state: GameState::WaitingForPlayers,
            rounds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            screen: Box::new(Silent),
        }
    }

    /// Sends table output to `screen`.
    #[must_use]
    pub fn with_screen(mut self, screen: impl Screen + 'static) -> Self {
        self.screen = Box::new(screen);
        self
    }

    /// Seats a client at the end of the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the table is full, or
    /// the client has no name or no chips.
    pub fn join(&mut self, client: impl Client + 'static) -> Result<(), SeatError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SeatError::InvalidState);
        }
        if self.players.len() >= self.options.max_players {
            return Err(SeatError::TableFull);
        }
        if client.name().trim().is_empty() {
            return Err(SeatError::EmptyName);
        }
        if client.chips() == 0 {
            return Err(SeatError::NoChips);
        }

        info!("{} sits down with {} chips", client.name(), client.chips());
        self.players.push(Box::new(client));
        Ok(())
    }

    /// Plays rounds until every client is eliminated or the round limit is
    /// reached. Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns the error of the first round that had to be aborted.
    pub fn play(&mut self) -> Result<u32, RoundError> {
        let mut played = 0;
        while self.has_players() && self.options.max_rounds.is_none_or(|max| played < max) {
            self.play_round()?;
            played += 1;
        }
        info!("game over after {played} rounds");
        Ok(played)
    }

    /// Plays one complete round, from shuffle to eliminations.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not between rounds or has no
    /// clients. Any failure mid-round aborts the round through
    /// [`Table::abort_round`] before the error is returned, so no chips
    /// move and no cards are lost.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.start_round()?;
        match self.run_round() {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!("round {} aborted: {err}", self.rounds);
                self.abort_round();
                Err(err)
            }
        }
    }

    fn run_round(&mut self) -> Result<RoundResult, RoundError> {
        self.collect_bets()?;
        self.deal()?;
        self.play_clients()?;
        self.play_dealer()?;
        let mut result = self.settle()?;
        self.discard()?;
        result.eliminated = self.eliminate()?;
        Ok(result)
    }

    /// Shuffles the shoe and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or no clients
    /// are seated.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(RoundError::InvalidState);
        }
        if !self.has_players() {
            return Err(RoundError::NoPlayers);
        }

        self.rounds += 1;
        info!(
            "round {} with {} clients, {} cards in the shoe",
            self.rounds,
            self.players.len(),
            self.shoe.len()
        );

        self.shoe.shuffle(&mut self.rng);
        debug!("shoe shuffled");
        if self.options.cut_after_shuffle {
            let at = self.shoe.cut(&mut self.rng)?;
            debug!("shoe cut at {at}");
        }

        self.bets.clear();
        self.state = GameState::Betting;
        Ok(())
    }

    /// Abandons the round in progress.
    ///
    /// Every card in play goes back face up to the bottom of the shoe and
    /// the bets are dropped. Chips are untouched since they only move at
    /// payout.
    pub fn abort_round(&mut self) {
        self.return_cards();
        self.bets.clear();
        self.state = GameState::WaitingForPlayers;
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Deck {
        &self.shoe
    }

    /// Returns the shoe for rearranging.
    pub const fn shoe_mut(&mut self) -> &mut Deck {
        &mut self.shoe
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the seated clients in seating order.
    #[must_use]
    pub fn players(&self) -> &[Box<dyn Client>] {
        &self.players
    }

    /// Returns the bets of the current round, in seating order.
    #[must_use]
    pub fn bets(&self) -> &[u32] {
        &self.bets
    }

    /// Returns whether any client is still seated.
    #[must_use]
    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    /// Returns the number of cards held by clients and the dealer.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.dealer.hand().len() + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    fn expect_state(&self, expected: GameState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }
}
