//! First-class action types for dots and boxes.
//!
//! A move is a player's intent to claim one edge. It can be validated
//! against a game before it is applied, and replayed from history.

use super::{Edge, PlayerId};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: a player claiming an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// The edge being claimed.
    pub edge: Edge,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Returns the edge claimed by this move.
    pub fn edge(&self) -> Edge {
        self.edge
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.edge)
    }
}

/// Error returned when a request is rejected.
///
/// Every rejection leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The edge lies outside the board for its orientation.
    #[display("Edge {} is outside the board", _0)]
    InvalidCoordinate(Edge),

    /// The edge already has an owner.
    #[display("Edge {} is already claimed", _0)]
    EdgeAlreadyClaimed(Edge),

    /// A move was submitted during setup or after the game ended.
    #[display("Game is not in progress")]
    GameNotInProgress,

    /// A roster change would leave the roster outside its bounds.
    #[display("Roster must hold between {} and {} players, {} requested", min, max, requested)]
    RosterBoundViolation {
        /// Roster size the change would produce.
        requested: usize,
        /// Smallest allowed roster.
        min: usize,
        /// Largest allowed roster.
        max: usize,
    },

    /// A player moved out of turn.
    #[display("It's {}'s turn, not {}'s", expected, actual)]
    NotYourTurn {
        /// The active player.
        expected: PlayerId,
        /// The player who tried to move.
        actual: PlayerId,
    },

    /// A setup command arrived after the game started.
    #[display("Game is not in setup")]
    NotInSetup,

    /// Board sizes run from 1 to 1024 boxes per side.
    #[display("Board size must be between 1 and 1024, got {}", _0)]
    InvalidBoardSize(usize),

    /// Player ids start at 1.
    #[display("Player id must be at least 1, got {}", _0)]
    InvalidPlayerId(u8),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
