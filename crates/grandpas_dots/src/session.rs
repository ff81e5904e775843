//! Game session: one explicit value holding a whole game lifecycle.
//!
//! The session owns whichever typestate phase is current and exposes the
//! command and query surface a front-end needs. Commands either apply fully
//! or return an error and change nothing.

use super::action::{GameError, Move};
use super::board::Board;
use super::geometry::BoardSize;
use super::phases::{Outcome, Phase};
use super::roster::Roster;
use super::scoring::{RankPolicy, Scores, Standings};
use super::typestate::{GameFinished, GameInProgress, GameSetup, MoveReport};
use super::types::{Edge, Orientation, PlayerId};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
enum Stage {
    Setup(GameSetup),
    InProgress(GameInProgress),
    Over(GameFinished),
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Setup(GameSetup::new())
    }
}

/// A game from setup through play to the final ranking.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    stage: Stage,
}

impl GameSession {
    /// Creates a session in setup with the default size and roster.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session in setup with chosen values.
    pub fn with_setup(setup: GameSetup) -> Self {
        Self {
            stage: Stage::Setup(setup),
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    fn setup_mut(&mut self) -> Result<&mut GameSetup, GameError> {
        let phase = self.phase();
        match &mut self.stage {
            Stage::Setup(setup) => Ok(setup),
            _ => {
                warn!(phase = %phase, "Setup command outside setup");
                Err(GameError::NotInSetup)
            }
        }
    }

    /// Adds a player during setup.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] outside setup, [`GameError::RosterBoundViolation`]
    /// with six players.
    #[instrument(skip(self))]
    pub fn add_player(&mut self) -> Result<PlayerId, GameError> {
        self.setup_mut()?.add_player()
    }

    /// Removes the last player during setup.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] outside setup, [`GameError::RosterBoundViolation`]
    /// with two players.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self) -> Result<PlayerId, GameError> {
        self.setup_mut()?.remove_player()
    }

    /// Chooses the board size during setup.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] outside setup, [`GameError::InvalidBoardSize`]
    /// outside `1..=BoardSize::MAX`.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, n: usize) -> Result<BoardSize, GameError> {
        self.setup_mut()?.set_board_size(n)
    }

    /// Chooses how ties are ranked during setup.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] outside setup.
    #[instrument(skip(self))]
    pub fn set_rank_policy(&mut self, policy: RankPolicy) -> Result<(), GameError> {
        self.setup_mut()?.set_rank_policy(policy);
        Ok(())
    }

    /// Starts play with the current setup.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] if a game is already running or over.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        self.setup_mut()?;
        if let Stage::Setup(setup) = std::mem::take(&mut self.stage) {
            self.stage = Stage::InProgress(setup.start());
        }
        Ok(())
    }

    /// Replaces the setup with `roster_size` players on an `n`×`n` board and
    /// starts play.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInSetup`] outside setup, [`GameError::RosterBoundViolation`]
    /// or [`GameError::InvalidBoardSize`] for bad values. Nothing changes on
    /// error.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, roster_size: usize, n: usize) -> Result<(), GameError> {
        let setup = self.setup_mut()?;
        let roster = Roster::with_size(roster_size)?;
        let size = BoardSize::new(n)?;
        *setup = GameSetup::with(size, roster, setup.policy());
        self.start()
    }

    /// Claims an edge for the active player.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotInProgress`] during setup or after the end, plus
    /// any claim rejection from [`GameInProgress::make_move`].
    #[instrument(skip(self), fields(edge = %edge))]
    pub fn submit_move(&mut self, edge: Edge) -> Result<MoveReport, GameError> {
        let player = self.active_player().ok_or(GameError::GameNotInProgress)?;
        self.submit_move_as(player, edge)
    }

    /// Claims an edge on behalf of a specific player.
    ///
    /// # Errors
    ///
    /// As [`GameSession::submit_move`], plus [`GameError::NotYourTurn`] when
    /// `player` is not the active player.
    #[instrument(skip(self), fields(player = %player, edge = %edge))]
    pub fn submit_move_as(&mut self, player: PlayerId, edge: Edge) -> Result<MoveReport, GameError> {
        let phase = self.phase();
        let Stage::InProgress(game) = &mut self.stage else {
            warn!(phase = %phase, "Move outside play");
            return Err(GameError::GameNotInProgress);
        };
        let report = game.make_move(Move::new(player, edge))?;
        if report.game_over
            && let Stage::InProgress(game) = std::mem::take(&mut self.stage)
        {
            self.stage = Stage::Over(game.finish());
        }
        Ok(report)
    }

    /// Abandons or closes the current game and returns to setup.
    ///
    /// The roster, board size and rank policy carry over.
    #[instrument(skip(self))]
    pub fn reset_to_setup(&mut self) {
        let setup = match std::mem::take(&mut self.stage) {
            Stage::Setup(setup) => setup,
            Stage::InProgress(game) => {
                GameSetup::with(game.board().size(), game.roster().clone(), game.policy())
            }
            Stage::Over(game) => game.restart(),
        };
        info!(size = %setup.size(), players = setup.roster().len(), "Back to setup");
        self.stage = Stage::Setup(setup);
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Setup(_) => Phase::Setup,
            Stage::InProgress(_) => Phase::InProgress,
            Stage::Over(_) => Phase::Over,
        }
    }

    /// The board; `None` during setup.
    pub fn board(&self) -> Option<&Board> {
        match &self.stage {
            Stage::Setup(_) => None,
            Stage::InProgress(game) => Some(game.board()),
            Stage::Over(game) => Some(game.board()),
        }
    }

    /// Chosen or current board size.
    pub fn board_size(&self) -> BoardSize {
        match &self.stage {
            Stage::Setup(setup) => setup.size(),
            Stage::InProgress(game) => game.board().size(),
            Stage::Over(game) => game.board().size(),
        }
    }

    /// Chosen or current roster.
    pub fn roster(&self) -> &Roster {
        match &self.stage {
            Stage::Setup(setup) => setup.roster(),
            Stage::InProgress(game) => game.roster(),
            Stage::Over(game) => game.roster(),
        }
    }

    /// Rank policy in effect.
    pub fn rank_policy(&self) -> RankPolicy {
        match &self.stage {
            Stage::Setup(setup) => setup.policy(),
            Stage::InProgress(game) => game.policy(),
            Stage::Over(game) => game.standings().policy(),
        }
    }

    /// Player to move; `None` unless in progress.
    pub fn active_player(&self) -> Option<PlayerId> {
        match &self.stage {
            Stage::InProgress(game) => Some(game.active_player()),
            _ => None,
        }
    }

    /// Scores; `None` during setup.
    pub fn scores(&self) -> Option<&Scores> {
        match &self.stage {
            Stage::Setup(_) => None,
            Stage::InProgress(game) => Some(game.scores()),
            Stage::Over(game) => Some(game.scores()),
        }
    }

    /// Standings so far, or the final ranking once over; `None` during setup.
    pub fn standings(&self) -> Option<Standings> {
        match &self.stage {
            Stage::Setup(_) => None,
            Stage::InProgress(game) => Some(game.standings()),
            Stage::Over(game) => Some(game.standings().clone()),
        }
    }

    /// The outcome; only once the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.stage {
            Stage::Over(game) => Some(game.outcome()),
            _ => None,
        }
    }

    /// Moves of the current or finished game.
    pub fn history(&self) -> &[Move] {
        match &self.stage {
            Stage::Setup(_) => &[],
            Stage::InProgress(game) => game.history(),
            Stage::Over(game) => game.history(),
        }
    }

    /// Serialisable view of the whole query surface.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> SessionSnapshot {
        let board = self.board();
        SessionSnapshot {
            phase: self.phase(),
            board_size: self.board_size().get(),
            roster: self.roster().players().to_vec(),
            active_player: self.active_player(),
            horizontal_edges: board.map(|b| b.edge_rows(Orientation::Horizontal)),
            vertical_edges: board.map(|b| b.edge_rows(Orientation::Vertical)),
            boxes: board.map(Board::box_rows),
            scores: self
                .scores()
                .map(|s| s.iter().collect())
                .unwrap_or_default(),
            standings: self.standings(),
            outcome: self.outcome().cloned(),
        }
    }
}

/// Point-in-time copy of a session for rendering or transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Side length in boxes.
    pub board_size: usize,
    /// Players in turn order.
    pub roster: Vec<PlayerId>,
    /// Player to move, while in progress.
    pub active_player: Option<PlayerId>,
    /// Horizontal edge owners by row, after setup.
    pub horizontal_edges: Option<Vec<Vec<Option<PlayerId>>>>,
    /// Vertical edge owners by row, after setup.
    pub vertical_edges: Option<Vec<Vec<Option<PlayerId>>>>,
    /// Box owners by row, after setup.
    pub boxes: Option<Vec<Vec<Option<PlayerId>>>>,
    /// Score per player in ascending player order.
    pub scores: Vec<(PlayerId, usize)>,
    /// Standings, after setup.
    pub standings: Option<Standings>,
    /// Outcome, once over.
    pub outcome: Option<Outcome>,
}

impl SessionSnapshot {
    /// Renders the snapshot as pretty JSON.
    ///
    /// # Errors
    ///
    /// Propagates serialisation failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Cloneable handle that serialises access to one session.
///
/// Each call holds the lock for the whole command, so at most one mutation
/// is in flight.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wraps a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        // Commands never leave a session half-updated, so a poisoned lock
        // still guards a valid session.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs a closure with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.lock())
    }

    /// Claims an edge on behalf of a player.
    ///
    /// # Errors
    ///
    /// As [`GameSession::submit_move_as`].
    pub fn submit_move_as(&self, player: PlayerId, edge: Edge) -> Result<MoveReport, GameError> {
        self.lock().submit_move_as(player, edge)
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }
}
