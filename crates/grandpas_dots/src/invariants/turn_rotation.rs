//! Turn rotation invariant: extra turns for completions, rotation otherwise.

use super::super::{Board, GameInProgress, TurnOrder};
use super::Invariant;

/// Invariant: the history follows the turn rules.
///
/// The last move was made either by the active player, after closing a
/// box, or by the player before them in rotation. Replaying the history,
/// every move is made by the player whose turn it was, the turn passes
/// exactly when a move closed no box, and the active player at the end
/// matches the game.
pub struct TurnRotationInvariant;

impl Invariant<GameInProgress> for TurnRotationInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let turns = game.turns();
        if turns.index() >= turns.roster().len() {
            return false;
        }
        if let Some(last) = game.history().last() {
            let closed_box = game
                .board()
                .size()
                .adjacent_boxes(last.edge)
                .into_iter()
                .any(|coord| game.board().box_owner(coord) == Some(last.player));
            let expected_mover = if closed_box {
                turns.active()
            } else {
                turns.previous()
            };
            if last.player != expected_mover {
                return false;
            }
        }

        let mut board = Board::new(game.board().size());
        let mut expected = TurnOrder::new(turns.roster().clone());
        for mov in game.history() {
            if mov.player != expected.active() {
                return false;
            }
            // Illegal claims are MonotonicEdgesInvariant's concern.
            let completed = board.claim_edge(mov.edge, mov.player).map_or(0, |c| c.len());
            expected.advance(completed);
        }

        expected.index() == turns.index()
    }

    fn description() -> &'static str {
        "Players keep the turn after closing a box and rotate otherwise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, GameSetup, Move, PlayerId};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start();
        assert!(TurnRotationInvariant::holds(&game));
    }

    #[test]
    fn test_rotation_and_extra_turn_hold() {
        let mut game = GameSetup::new().start();
        let p1 = PlayerId::FIRST;
        let p2 = p1.next();
        for action in [
            Move::new(p1, Edge::horizontal(0, 0)),
            Move::new(p2, Edge::horizontal(1, 0)),
            Move::new(p1, Edge::vertical(0, 0)),
            Move::new(p2, Edge::vertical(0, 1)),
            // p2 closed a box and moves again.
            Move::new(p2, Edge::horizontal(3, 2)),
        ] {
            game.make_move(action).unwrap();
        }
        assert_eq!(game.active_player(), p1);
        assert!(TurnRotationInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_player_violates() {
        let setup = GameSetup::with(
            crate::BoardSize::DEFAULT,
            crate::Roster::with_size(3).unwrap(),
            crate::RankPolicy::default(),
        );
        let mut game = setup.start();
        game.make_move(Move::new(PlayerId::FIRST, Edge::horizontal(0, 0))).unwrap();
        assert_eq!(game.turns.previous(), PlayerId::FIRST);

        // Jump straight to P3: P1 no longer sits before the active player.
        game.turns.advance(0);
        assert_ne!(game.turns.previous(), PlayerId::FIRST);
        assert!(!TurnRotationInvariant::holds(&game));
    }

    #[test]
    fn test_stalled_turn_violates() {
        let mut game = GameSetup::new().start();
        game.make_move(Move::new(PlayerId::FIRST, Edge::horizontal(0, 0))).unwrap();
        // Put the turn back on P1 even though no box was closed.
        game.turns = TurnOrder::new(game.turns.roster().clone());
        assert!(!TurnRotationInvariant::holds(&game));
    }
}
