//! Game state types.

/// Phase of the round in progress.
///
/// A round walks through the phases in declaration order and returns to
/// [`GameState::WaitingForPlayers`] once eliminations are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; clients may be seated.
    WaitingForPlayers,
    /// Every client places a bet.
    Betting,
    /// Two cards to each client, then the dealer's hole and up cards.
    Dealing,
    /// Clients draw until they stand.
    PlayerTurns,
    /// The dealer reveals the hole card and draws to the house total.
    DealerTurn,
    /// Bets are won, lost or pushed.
    Payout,
    /// Every hand goes back to the bottom of the shoe.
    Discard,
    /// Clients without chips leave.
    Elimination,
}
