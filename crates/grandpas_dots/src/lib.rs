//! Grandpa's Dots - dots and boxes for any board size and 2 to 6 players.
//!
//! Players take turns claiming edges between adjacent dots. Claiming the
//! fourth side of a box wins that box and another turn. The game ends when
//! every edge is claimed; most boxes wins and a shared top score is a draw.
//!
//! # Architecture
//!
//! - **Geometry**: edge and box counts and bounds for an N×N board
//! - **Board**: edge and box ownership with the single `claim_edge` mutation
//! - **Turns**: roster rotation with the extra-turn rule
//! - **Scoring**: scores, standings and the rank tie policy
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Contracts / Invariants**: move preconditions and postconditions
//! - **Session**: one owned value driving the whole lifecycle
//!
//! # Example
//!
//! ```
//! use grandpas_dots::{Edge, GameSession, Phase};
//!
//! let mut session = GameSession::new();
//! session.start_game(2, 1)?;
//! session.submit_move(Edge::horizontal(0, 0))?;
//! session.submit_move(Edge::horizontal(1, 0))?;
//! session.submit_move(Edge::vertical(0, 0))?;
//! let report = session.submit_move(Edge::vertical(0, 1))?;
//!
//! assert_eq!(report.completed.len(), 1);
//! assert_eq!(session.phase(), Phase::Over);
//! # Ok::<(), grandpas_dots::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod geometry;
mod invariants;
mod phases;
mod roster;
mod scoring;
mod session;
mod turn;
mod typestate;
mod types;

pub use action::{GameError, Move};
pub use board::Board;
pub use contracts::{
    ClaimContract, Contract, EdgeInBounds, EdgeIsUnclaimed, LegalClaim, PlayersTurn,
};
pub use geometry::BoardSize;
pub use invariants::{
    ClosedBoxInvariant, DotsInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicEdgesInvariant, ScoreConsistentInvariant, TurnRotationInvariant,
};
pub use phases::{Outcome, Phase};
pub use roster::{MAX_PLAYERS, MIN_PLAYERS, Roster};
pub use scoring::{RankEntry, RankPolicy, Scores, Standings};
pub use session::{GameSession, SessionSnapshot, SharedSession};
pub use turn::TurnOrder;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, MoveReport};
pub use types::{BoxCoord, Edge, Orientation, PlayerId};
