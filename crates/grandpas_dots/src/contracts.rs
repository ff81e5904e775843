//! Contract-based validation for edge claims.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use super::action::{GameError, Move};
use super::invariants::{DotsInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Claim Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the edge lies on the board.
pub struct EdgeInBounds;

impl EdgeInBounds {
    /// Rejects edges outside the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), GameError> {
        if game.board().size().contains_edge(mov.edge) {
            Ok(())
        } else {
            Err(GameError::InvalidCoordinate(mov.edge))
        }
    }
}

/// Precondition: nobody owns the edge yet.
pub struct EdgeIsUnclaimed;

impl EdgeIsUnclaimed {
    /// Rejects owned edges.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), GameError> {
        if game.board().is_claimed(mov.edge) {
            Err(GameError::EdgeAlreadyClaimed(mov.edge))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mover is the active player.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves from anyone but the active player.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), GameError> {
        let expected = game.active_player();
        if mov.player == expected {
            Ok(())
        } else {
            Err(GameError::NotYourTurn {
                expected,
                actual: mov.player,
            })
        }
    }
}

/// Composite precondition, checked in order: bounds, ownership, turn.
pub struct LegalClaim;

impl LegalClaim {
    /// Validates all preconditions for a claim.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), GameError> {
        EdgeInBounds::check(mov, game)?;
        EdgeIsUnclaimed::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Claim Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for claiming an edge.
///
/// Postconditions: exactly one more move in history, exactly one more
/// claimed edge, and every game invariant still holds.
pub struct ClaimContract;

impl Contract<GameInProgress, Move> for ClaimContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), GameError> {
        LegalClaim::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1
            || after.board().claimed_edges() != before.board().claimed_edges() + 1
        {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: a claim must add exactly one edge".to_string(),
            ));
        }
        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, GameSetup, PlayerId};

    const P1: PlayerId = PlayerId::FIRST;

    #[test]
    fn test_precondition_open_edge() {
        let game = GameSetup::new().start();
        let action = Move::new(P1, Edge::horizontal(0, 0));
        assert!(ClaimContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_claimed_edge() {
        let mut game = GameSetup::new().start();
        game.make_move(Move::new(P1, Edge::horizontal(0, 0))).unwrap();

        let action = Move::new(P1.next(), Edge::horizontal(0, 0));
        assert!(matches!(
            ClaimContract::pre(&game, &action),
            Err(GameError::EdgeAlreadyClaimed(_))
        ));
    }

    #[test]
    fn test_claimed_edge_reported_before_wrong_turn() {
        let mut game = GameSetup::new().start();
        game.make_move(Move::new(P1, Edge::horizontal(0, 0))).unwrap();

        // P1 is no longer active, but the edge check comes first.
        let action = Move::new(P1, Edge::horizontal(0, 0));
        assert!(matches!(
            ClaimContract::pre(&game, &action),
            Err(GameError::EdgeAlreadyClaimed(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start();
        let action = Move::new(P1.next(), Edge::vertical(0, 0));
        assert!(matches!(
            ClaimContract::pre(&game, &action),
            Err(GameError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameSetup::new().start();
        let action = Move::new(P1, Edge::vertical(3, 0));
        assert_eq!(
            ClaimContract::pre(&game, &action),
            Err(GameError::InvalidCoordinate(Edge::vertical(3, 0)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start();
        let mut after = game.clone();
        after.make_move(Move::new(P1, Edge::horizontal(2, 1))).unwrap();
        assert!(ClaimContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start();
        let mut after = game.clone();
        after.make_move(Move::new(P1, Edge::horizontal(2, 1))).unwrap();

        // Score a box nobody closed.
        after.scores.award(P1, 1);
        assert!(ClaimContract::post(&game, &after).is_err());
    }
}
