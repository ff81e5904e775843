//! Game phases and outcomes.

use serde::{Deserialize, Serialize};

/// Coarse lifecycle stage of a session.
///
/// Progresses strictly `Setup -> InProgress -> Over`; only a reset goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Choosing board size and roster.
    Setup,
    /// Moves are being accepted.
    InProgress,
    /// Every edge is claimed.
    Over,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player has strictly more boxes than everyone else.
    Winner(super::PlayerId),
    /// These players share the highest score.
    Draw(Vec<super::PlayerId>),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::PlayerId> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw(_) => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player.get()),
            Outcome::Draw(players) => {
                let names: Vec<String> = players.iter().map(ToString::to_string).collect();
                write!(f, "It's a tie between {}", names.join(", "))
            }
        }
    }
}
