//! Table integration tests.

mod common;

use common::{Scripted, rig};
use croupier::player::CALM;
use croupier::{
    CardPlayer, Computer, GameState, HandOutcome, Human, RoundError, SeatError, Table,
    TableOptions,
};

fn human(name: &str, chips: u32, bet: u32, answers: &[bool]) -> Human<Scripted> {
    Human::new(name, chips, Scripted::new(&[bet], answers))
}

#[test]
fn seating_errors() {
    let mut table = Table::new(TableOptions::default().with_max_players(2), 1);

    assert_eq!(
        table.join(human("Broke", 0, 1, &[])).unwrap_err(),
        SeatError::NoChips
    );
    assert_eq!(
        table.join(human("  ", 10, 1, &[])).unwrap_err(),
        SeatError::EmptyName
    );

    table.join(human("Cris", 10, 1, &[])).unwrap();
    table.join(Computer::new("Batman", 10, 1)).unwrap();
    assert_eq!(
        table.join(human("Zotel", 10, 1, &[])).unwrap_err(),
        SeatError::TableFull
    );
    assert_eq!(table.players().len(), 2);
}

#[test]
fn seating_is_closed_during_a_round() {
    let mut table = Table::new(TableOptions::default(), 1);
    table.join(human("Cris", 10, 1, &[])).unwrap();
    table.start_round().unwrap();

    assert_eq!(
        table.join(human("Zotel", 10, 1, &[])).unwrap_err(),
        SeatError::InvalidState
    );
}

#[test]
fn round_needs_players() {
    let mut table = Table::new(TableOptions::default(), 1);
    assert!(matches!(table.start_round(), Err(RoundError::NoPlayers)));
    assert_eq!(table.play().unwrap(), 0);
}

#[test]
fn phases_run_in_order() {
    let mut table = Table::new(TableOptions::default(), 1);
    table.join(human("Cris", 10, 1, &[])).unwrap();

    assert!(matches!(table.collect_bets(), Err(RoundError::InvalidState)));
    assert!(matches!(table.deal(), Err(RoundError::InvalidState)));

    table.start_round().unwrap();
    assert_eq!(table.state(), GameState::Betting);
    assert!(matches!(table.start_round(), Err(RoundError::InvalidState)));
    assert!(matches!(table.play_dealer(), Err(RoundError::InvalidState)));
    assert!(matches!(table.settle(), Err(RoundError::InvalidState)));
}

#[test]
fn dealer_bust_pays_standing_clients_only() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(human("A", 100, 10, &[true])).unwrap();
    table.join(human("B", 100, 5, &[false])).unwrap();

    table.start_round().unwrap();
    rig(
        &mut table,
        &[
            13, 12, // A: 20
            13, 4, // B: 14
            10, 6, // dealer hole, up
            12, // B hits to 24
            7, // dealer hits to 23
        ],
    );

    table.collect_bets().unwrap();
    assert_eq!(table.bets(), [10, 5]);

    table.deal().unwrap();
    assert_eq!(table.state(), GameState::PlayerTurns);
    let dealer_cards = table.dealer().hand().cards();
    assert!(!dealer_cards[0].is_face_up());
    assert!(dealer_cards[1].is_face_up());

    table.play_clients().unwrap();
    assert_eq!(table.players()[0].total(), 20);
    assert_eq!(table.players()[1].total(), 24);

    let drawn = table.play_dealer().unwrap();
    assert_eq!(drawn.len(), 1);
    let dealer_cards = table.dealer().hand().cards();
    assert!(dealer_cards.iter().all(|card| card.is_face_up()));
    assert_eq!(dealer_cards[0].rank(), 10);
    assert_eq!(table.dealer().total(), 23);

    let result = table.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 23);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].net(), 10);
    assert_eq!(result.players[1].outcome, HandOutcome::Lose);
    assert_eq!(result.players[1].net(), -5);
    assert_eq!(table.players()[0].chips(), 110);
    assert_eq!(table.players()[1].chips(), 95);

    table.discard().unwrap();
    assert_eq!(table.cards_in_play(), 0);
    assert_eq!(table.shoe().len(), 8);
    assert!(table.shoe().iter().all(|card| card.is_face_up()));

    assert!(table.eliminate().unwrap().is_empty());
    assert_eq!(table.state(), GameState::WaitingForPlayers);
}

#[test]
fn equal_totals_push() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(human("Even", 50, 10, &[true])).unwrap();
    table.join(human("Higher", 50, 10, &[true])).unwrap();
    table.join(human("Lower", 50, 10, &[true])).unwrap();

    table.start_round().unwrap();
    rig(&mut table, &[10, 8, 10, 9, 10, 7, 10, 8]);

    table.collect_bets().unwrap();
    table.deal().unwrap();
    table.play_clients().unwrap();
    assert!(table.play_dealer().unwrap().is_empty());

    let result = table.settle().unwrap();
    assert!(!result.dealer_bust);
    assert_eq!(result.dealer_total, 18);

    let outcomes: Vec<HandOutcome> = result.players.iter().map(|p| p.outcome).collect();
    assert_eq!(
        outcomes,
        [HandOutcome::Push, HandOutcome::Win, HandOutcome::Lose]
    );
    let chips: Vec<u32> = table.players().iter().map(|p| p.chips()).collect();
    assert_eq!(chips, [50, 60, 40]);
}

#[test]
fn broke_clients_leave_before_the_next_round() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(human("AllIn", 10, 10, &[true])).unwrap();
    table.join(human("Careful", 2, 1, &[true])).unwrap();

    table.start_round().unwrap();
    rig(&mut table, &[10, 7, 10, 6, 10, 9]);

    table.collect_bets().unwrap();
    table.deal().unwrap();
    table.play_clients().unwrap();
    table.play_dealer().unwrap();
    let result = table.settle().unwrap();
    assert_eq!(result.players[0].chips, 0);
    assert_eq!(result.players[1].chips, 1);

    table.discard().unwrap();
    assert_eq!(table.eliminate().unwrap(), ["AllIn"]);
    assert_eq!(table.players().len(), 1);
    assert_eq!(table.players()[0].name(), "Careful");
    assert_eq!(table.players()[0].chips(), 1);
}

#[test]
fn empty_shoe_aborts_the_round_cleanly() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(human("Cris", 100, 10, &[])).unwrap();

    table.start_round().unwrap();
    rig(&mut table, &[10, 7, 10]);
    table.collect_bets().unwrap();

    assert!(matches!(table.deal(), Err(RoundError::ShoeExhausted)));
    table.abort_round();

    assert_eq!(table.state(), GameState::WaitingForPlayers);
    assert_eq!(table.cards_in_play(), 0);
    assert_eq!(table.shoe().len(), 3);
    assert!(table.shoe().iter().all(|card| card.is_face_up()));
    assert!(table.bets().is_empty());
    assert_eq!(table.players()[0].chips(), 100);
}

#[test]
fn play_round_aborts_on_exhausted_shoe() {
    let mut table = Table::new(TableOptions::default().with_decks(0), 7);
    table
        .join(Computer::with_personality("Batman", 40, CALM, 3))
        .unwrap();

    assert!(matches!(table.play_round(), Err(RoundError::ShoeExhausted)));
    assert_eq!(table.state(), GameState::WaitingForPlayers);
    assert_eq!(table.players()[0].chips(), 40);
    assert!(matches!(table.play(), Err(RoundError::ShoeExhausted)));
}

#[test]
fn out_of_range_bet_aborts_the_round() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(human("Greedy", 10, 11, &[])).unwrap();

    assert!(matches!(
        table.play_round(),
        Err(RoundError::InvalidBet {
            amount: 11,
            chips: 10
        })
    ));
    assert_eq!(table.state(), GameState::WaitingForPlayers);
    assert_eq!(table.shoe().len(), 312);
}

#[test]
fn input_failure_aborts_the_round() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.join(Human::new("Mute", 10, Scripted::default())).unwrap();

    assert!(matches!(table.play_round(), Err(RoundError::Input(_))));
    assert_eq!(table.state(), GameState::WaitingForPlayers);
}

#[test]
fn shoe_is_conserved_across_rounds() {
    let options = TableOptions::default().with_cut_after_shuffle(true);
    let mut table = Table::new(options, 21);
    table.join(Computer::new("Batman", 1_000, 1)).unwrap();
    table.join(Computer::new("Spider-man", 1_000, 2)).unwrap();

    for _ in 0..20 {
        if !table.has_players() {
            break;
        }
        let result = table.play_round().unwrap();
        assert_eq!(table.shoe().len(), 312);
        assert_eq!(table.cards_in_play(), 0);
        for player in &result.players {
            assert!(player.bet >= 1);
        }
    }
}

#[test]
fn computers_play_until_limit_or_elimination() {
    let options = TableOptions::default().with_max_rounds(Some(500));
    let mut table = Table::new(options, 99);
    table.join(Computer::new("Batman", 100, 1)).unwrap();
    table.join(Computer::new("Spider-man", 100, 2)).unwrap();
    table.join(Computer::new("Robin", 100, 3)).unwrap();

    let rounds = table.play().unwrap();
    assert!(rounds <= 500);
    assert_eq!(table.rounds_played(), rounds);
    assert!(table.players().iter().all(|p| p.chips() > 0));
    assert_eq!(table.shoe().len(), 312);
}

#[test]
fn same_seeds_replay_the_same_game() {
    let play = || {
        let mut table = Table::new(TableOptions::default(), 5);
        table.join(Computer::new("Batman", 100, 1)).unwrap();
        table.join(Computer::new("Robin", 100, 2)).unwrap();
        (0..5)
            .map_while(|_| table.play_round().ok())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(), play());
}
