//! Game state types.

use core::fmt;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has been dealt yet.
    Waiting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the human player to hit or stand.
    PlayerTurn,
    /// Dealer and bots play out their hands.
    AutomatedTurns,
    /// Round has ended and has been settled.
    RoundOver,
}

/// An action a caller can ask the game to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw a card into the player's hand.
    Hit,
    /// End the player's turn.
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
        })
    }
}

/// A position at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The dealer.
    Dealer,
    /// The human player.
    Player,
    /// First automated hand.
    Bot1,
    /// Second automated hand.
    Bot2,
}

impl Seat {
    /// Seats that play automatically, in turn order.
    pub const AUTOMATED: [Self; 3] = [Self::Dealer, Self::Bot1, Self::Bot2];
}

/// Cumulative counters across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Rounds that reached [`Phase::RoundOver`].
    pub rounds_played: u32,
    /// Rounds the human player won.
    pub rounds_won: u32,
    /// Rounds the human player lost.
    pub rounds_lost: u32,
}
