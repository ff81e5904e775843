//! Ordered player roster, editable during setup.

use super::action::GameError;
use super::types::PlayerId;
use serde::Serialize;
use tracing::{instrument, warn};

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can have.
pub const MAX_PLAYERS: usize = 6;

/// Players in turn order, always `P1..=Pk` with `k` in `[2, 6]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    /// Creates the default two-player roster.
    pub fn new() -> Self {
        Self {
            players: vec![PlayerId::FIRST, PlayerId::FIRST.next()],
        }
    }

    /// Creates a roster of `count` players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterBoundViolation`] outside `[2, 6]`.
    #[instrument]
    pub fn with_size(count: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(bound_violation(count));
        }
        let mut roster = Self::new();
        while roster.len() < count {
            roster.add()?;
        }
        Ok(roster)
    }

    /// Appends the next player id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterBoundViolation`] if the roster is full.
    #[instrument(skip(self), fields(size = self.players.len()))]
    pub fn add(&mut self) -> Result<PlayerId, GameError> {
        if self.players.len() >= MAX_PLAYERS {
            warn!("Roster already full");
            return Err(bound_violation(self.players.len() + 1));
        }
        let next = self
            .players
            .last()
            .map_or(PlayerId::FIRST, |last| last.next());
        self.players.push(next);
        Ok(next)
    }

    /// Removes the last player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterBoundViolation`] at the minimum size.
    #[instrument(skip(self), fields(size = self.players.len()))]
    pub fn remove(&mut self) -> Result<PlayerId, GameError> {
        if self.players.len() <= MIN_PLAYERS {
            warn!("Roster already at minimum");
            return Err(bound_violation(self.players.len().saturating_sub(1)));
        }
        self.players.pop().ok_or_else(|| bound_violation(0))
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if there are no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player at a turn index.
    pub fn get(&self, index: usize) -> Option<PlayerId> {
        self.players.get(index).copied()
    }

    /// Players in turn order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Returns true if the player is in this roster.
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

fn bound_violation(requested: usize) -> GameError {
    GameError::RosterBoundViolation {
        requested,
        min: MIN_PLAYERS,
        max: MAX_PLAYERS,
    }
}
