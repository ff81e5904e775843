//! Score invariant: scores always agree with box ownership.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: every player's score equals the boxes they own.
///
/// Also implies that the scores sum to the claimed boxes, which never exceed
/// `N²`, and that exactly the roster is scored.
pub struct ScoreConsistentInvariant;

impl Invariant<GameInProgress> for ScoreConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let scores = game.scores();
        let roster = game.roster();

        scores.len() == roster.len()
            && roster
                .players()
                .iter()
                .all(|p| scores.get(*p) == board.boxes_owned_by(*p))
            && scores.total() == board.claimed_boxes()
            && board.claimed_boxes() <= board.size().box_count()
    }

    fn description() -> &'static str {
        "Scores match owned boxes and sum to the claimed boxes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, GameSetup, Move, PlayerId};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::new().start();
        assert!(ScoreConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_completed_box_is_scored() {
        let mut game = GameSetup::new().start();
        let p1 = PlayerId::FIRST;
        let p2 = p1.next();
        for action in [
            Move::new(p1, Edge::horizontal(0, 0)),
            Move::new(p2, Edge::horizontal(1, 0)),
            Move::new(p1, Edge::vertical(0, 0)),
            Move::new(p2, Edge::vertical(0, 1)),
        ] {
            game.make_move(action).unwrap();
        }
        assert_eq!(game.scores().get(p2), 1);
        assert!(ScoreConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_phantom_point_violates() {
        let mut game = GameSetup::new().start();
        game.scores.award(PlayerId::FIRST.next(), 1);
        assert!(!ScoreConsistentInvariant::holds(&game));
    }
}
