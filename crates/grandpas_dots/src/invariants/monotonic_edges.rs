//! Monotonic edges invariant: claims are never overwritten.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Each recorded move must claim an edge that was open at the time, and
/// replaying them on an empty board must reproduce every edge and box owner.
pub struct MonotonicEdgesInvariant;

impl Invariant<GameInProgress> for MonotonicEdgesInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for mov in game.history() {
            if reconstructed.claim_edge(mov.edge, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Edges are claimed once and the board matches the move history"
    }
}
