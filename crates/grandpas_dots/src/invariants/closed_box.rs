//! Closed box invariant: a box has an owner exactly when it is closed.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: a box is owned iff all four of its edges are claimed.
///
/// A closed box without an owner means a completion was missed; an owned
/// box with an open side means one was invented.
pub struct ClosedBoxInvariant;

impl Invariant<GameInProgress> for ClosedBoxInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        board
            .size()
            .boxes()
            .all(|coord| board.box_owner(coord).is_some() == board.is_box_closed(coord))
    }

    fn description() -> &'static str {
        "A box is owned exactly when its four edges are claimed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxCoord, Edge, GameSetup, Move, PlayerId};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::new().start();
        assert!(ClosedBoxInvariant::holds(&game));
    }

    #[test]
    fn test_open_sides_hold() {
        let mut game = GameSetup::new().start();
        game.make_move(Move::new(PlayerId::FIRST, Edge::vertical(1, 1))).unwrap();
        assert!(ClosedBoxInvariant::holds(&game));
    }

    #[test]
    fn test_owned_open_box_violates() {
        let mut game = GameSetup::new().start();
        game.board.set_box_owner(BoxCoord::new(1, 1), Some(PlayerId::FIRST));
        assert!(!ClosedBoxInvariant::holds(&game));
    }
}
