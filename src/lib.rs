//! A multi-round blackjack table for human and computer players.
//!
//! The crate provides a [`Table`] that owns a six-deck shoe and a
//! [`Dealer`], seats any number of [`Client`]s and runs rounds of
//! betting, dealing, play, payout and discard until every client is out
//! of chips.
//!
//! # Example
//!
//! ```no_run
//! use croupier::{Computer, Human, LinePrompt, Table, TableOptions, Terminal};
//!
//! let mut table = Table::new(TableOptions::default(), 42).with_screen(Terminal::new(true));
//! table.join(Human::new("Cris", 100, LinePrompt::stdin())).unwrap();
//! table.join(Computer::new("Batman", 100, 7)).unwrap();
//! table.play().unwrap();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod render;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::{LinePrompt, Prompt, Screen, Silent, Terminal};
pub use deck::{Deck, SHOE_DECKS};
pub use error::{CardError, DeckError, PromptError, RoundError, SeatError};
pub use game::{GameState, Table};
pub use options::TableOptions;
pub use player::{Bets, CardPlayer, Client, Computer, Dealer, Human, Stands};
pub use result::{HandOutcome, PlayerResult, RoundResult};
