//! Phase-specific typestate structs for dots and boxes.
//!
//! Each phase is its own type with its own fields. A `GameFinished` always
//! has an outcome, and only a `GameInProgress` accepts moves.

use super::action::{GameError, Move};
use super::board::Board;
use super::contracts::{ClaimContract, Contract};
use super::geometry::BoardSize;
use super::phases::Outcome;
use super::roster::Roster;
use super::scoring::{RankPolicy, Scores, Standings};
use super::turn::TurnOrder;
use super::types::{BoxCoord, Edge, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup: board size, roster and rank policy can still change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    size: BoardSize,
    roster: Roster,
    policy: RankPolicy,
}

impl GameSetup {
    /// Creates a setup with a 3x3 board and two players.
    pub fn new() -> Self {
        Self {
            size: BoardSize::DEFAULT,
            roster: Roster::new(),
            policy: RankPolicy::default(),
        }
    }

    /// Creates a setup from chosen values.
    pub fn with(size: BoardSize, roster: Roster, policy: RankPolicy) -> Self {
        Self { size, roster, policy }
    }

    /// Chosen board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Chosen roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Chosen rank policy.
    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Changes the board size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] outside `1..=BoardSize::MAX`.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, n: usize) -> Result<BoardSize, GameError> {
        self.size = BoardSize::new(n)?;
        Ok(self.size)
    }

    /// Changes the rank policy.
    pub fn set_rank_policy(&mut self, policy: RankPolicy) {
        self.policy = policy;
    }

    /// Adds the next player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterBoundViolation`] with six players already.
    pub fn add_player(&mut self) -> Result<PlayerId, GameError> {
        self.roster.add()
    }

    /// Removes the last player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterBoundViolation`] with two players left.
    pub fn remove_player(&mut self) -> Result<PlayerId, GameError> {
        self.roster.remove()
    }

    /// Starts play with a fresh board and zero scores.
    #[instrument(skip(self), fields(size = %self.size, players = self.roster.len()))]
    pub fn start(self) -> GameInProgress {
        info!("Game started");
        GameInProgress {
            board: Board::new(self.size),
            scores: Scores::new(&self.roster),
            turns: TurnOrder::new(self.roster),
            history: Vec::new(),
            policy: self.policy,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who moved.
    pub mover: PlayerId,
    /// The claimed edge.
    pub edge: Edge,
    /// Boxes closed by the move.
    pub completed: Vec<BoxCoord>,
    /// Who moves next; `None` once the game is over.
    pub next: Option<PlayerId>,
    /// True if this move claimed the last edge.
    pub game_over: bool,
}

impl MoveReport {
    /// True if the mover keeps the turn.
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Game in progress: accepts moves until every edge is claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) scores: Scores,
    pub(crate) turns: TurnOrder,
    pub(crate) history: Vec<Move>,
    pub(crate) policy: RankPolicy,
}

impl GameInProgress {
    /// Applies a move.
    ///
    /// Preconditions are always checked; postconditions run in debug builds.
    /// A rejected move leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidCoordinate`], [`GameError::EdgeAlreadyClaimed`] or
    /// [`GameError::NotYourTurn`] when a precondition fails, and
    /// [`GameError::InvariantViolation`] when a postcondition fails.
    #[instrument(skip(self), fields(action = %action))]
    pub fn make_move(&mut self, action: Move) -> Result<MoveReport, GameError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(e) = ClaimContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let completed = self.board.claim_edge(action.edge, action.player)?;
        self.scores.award(action.player, completed.len());
        let next = self.turns.advance(completed.len());
        self.history.push(action);

        #[cfg(debug_assertions)]
        if let Err(e) = ClaimContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, move rolled back");
            *self = before;
            return Err(e);
        }

        let game_over = self.board.is_complete();
        debug!(completed = completed.len(), game_over, "Move applied");
        Ok(MoveReport {
            mover: action.player,
            edge: action.edge,
            completed,
            next: (!game_over).then_some(next),
            game_over,
        })
    }

    /// The player to move.
    pub fn active_player(&self) -> PlayerId {
        self.turns.active()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster in turn order.
    pub fn roster(&self) -> &Roster {
        self.turns.roster()
    }

    /// Current scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Turn rotation state.
    pub fn turns(&self) -> &TurnOrder {
        &self.turns
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rank policy for standings.
    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Current standings.
    pub fn standings(&self) -> Standings {
        Standings::new(&self.scores, self.policy)
    }

    /// Returns true once every edge is claimed.
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Moves to the finished phase if the board is complete.
    pub fn conclude(self) -> GameResult {
        if self.is_complete() {
            GameResult::Finished(self.finish())
        } else {
            GameResult::InProgress(self)
        }
    }

    /// Ranks the final scores. Callers check `is_complete` first.
    #[instrument(skip(self))]
    pub(crate) fn finish(self) -> GameFinished {
        let standings = self.standings();
        let outcome = standings.outcome();
        info!(outcome = %outcome, "Game over");
        GameFinished {
            board: self.board,
            roster: self.turns.roster().clone(),
            scores: self.scores,
            history: self.history,
            policy: self.policy,
            standings,
            outcome,
        }
    }

    /// Plays a sequence of moves from a setup.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, or [`GameError::GameNotInProgress`] for
    /// moves left over after the game ended.
    #[instrument(skip(setup, moves), fields(moves = moves.len()))]
    pub fn replay(setup: GameSetup, moves: &[Move]) -> Result<GameResult, GameError> {
        let mut game = setup.start();
        for (i, action) in moves.iter().enumerate() {
            game.make_move(*action)?;
            if game.is_complete() {
                if i + 1 < moves.len() {
                    return Err(GameError::GameNotInProgress);
                }
                return Ok(GameResult::Finished(game.finish()));
            }
        }
        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over: every edge claimed and the outcome fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    board: Board,
    roster: Roster,
    scores: Scores,
    history: Vec<Move>,
    policy: RankPolicy,
    standings: Standings,
    outcome: Outcome,
}

impl GameFinished {
    /// The outcome. Always present.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The final ranking.
    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// The final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster that played.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Final scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Every move of the game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Back to setup with the same size, roster and policy.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::with(self.board.size(), self.roster, self.policy)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Phase reached after moves.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> GameSetup {
        GameSetup::with(BoardSize::new(n).unwrap(), Roster::new(), RankPolicy::Positional)
    }

    #[test]
    fn test_start_zeroes_scores() {
        let game = setup(3).start();
        assert_eq!(game.scores().len(), 2);
        assert_eq!(game.scores().total(), 0);
        assert_eq!(game.active_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = setup(2).start();
        let before = game.clone();
        let p2 = PlayerId::FIRST.next();
        assert!(game.make_move(Move::new(p2, Edge::horizontal(0, 0))).is_err());
        assert!(game.make_move(Move::new(PlayerId::FIRST, Edge::horizontal(5, 0))).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_conclude_keeps_unfinished_game() {
        let game = setup(1).start();
        assert!(matches!(game.conclude(), GameResult::InProgress(_)));
    }

    #[test]
    fn test_replay_rejects_moves_after_end() {
        let p1 = PlayerId::FIRST;
        let p2 = p1.next();
        let moves = [
            Move::new(p1, Edge::horizontal(0, 0)),
            Move::new(p2, Edge::horizontal(1, 0)),
            Move::new(p1, Edge::vertical(0, 0)),
            Move::new(p2, Edge::vertical(0, 1)),
            Move::new(p2, Edge::vertical(0, 1)),
        ];
        assert_eq!(
            GameInProgress::replay(setup(1), &moves).err(),
            Some(GameError::GameNotInProgress)
        );
    }

    #[test]
    fn test_restart_keeps_choices() {
        let p1 = PlayerId::FIRST;
        let p2 = p1.next();
        let moves = [
            Move::new(p1, Edge::horizontal(0, 0)),
            Move::new(p2, Edge::horizontal(1, 0)),
            Move::new(p1, Edge::vertical(0, 0)),
            Move::new(p2, Edge::vertical(0, 1)),
        ];
        let GameResult::Finished(done) = GameInProgress::replay(setup(1), &moves).unwrap() else {
            panic!("Expected finished game");
        };
        assert_eq!(done.outcome(), &Outcome::Winner(p2));
        let again = done.restart();
        assert_eq!(again, setup(1));
    }
}
