//! Turn rotation with the extra-turn rule.

use super::roster::Roster;
use super::types::PlayerId;
use serde::Serialize;
use tracing::{debug, instrument};

/// Whose turn it is within a fixed roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOrder {
    roster: Roster,
    index: usize,
}

impl TurnOrder {
    /// Starts with the first player of the roster to move.
    pub fn new(roster: Roster) -> Self {
        Self { roster, index: 0 }
    }

    /// The roster in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Index of the active player.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active player.
    pub fn active(&self) -> PlayerId {
        // The index is kept in range by `advance`.
        self.roster.get(self.index).unwrap_or(PlayerId::FIRST)
    }

    /// The player who moved before the active one in rotation.
    pub fn previous(&self) -> PlayerId {
        let len = self.roster.len();
        self.roster
            .get((self.index + len - 1) % len)
            .unwrap_or(PlayerId::FIRST)
    }

    /// Applies the outcome of an accepted claim.
    ///
    /// A claim that completed at least one box keeps the same player;
    /// otherwise play passes to the next player in the roster.
    #[instrument(skip(self), fields(active = %self.active()))]
    pub fn advance(&mut self, boxes_completed: usize) -> PlayerId {
        if boxes_completed == 0 {
            self.index = (self.index + 1) % self.roster.len();
            debug!(next = %self.active(), "Turn passes");
        } else {
            debug!("Extra turn");
        }
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut turns = TurnOrder::new(Roster::with_size(3).unwrap());
        let seen: Vec<u8> = (0..4).map(|_| turns.advance(0).get()).collect();
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn test_completion_keeps_player() {
        let mut turns = TurnOrder::new(Roster::new());
        assert_eq!(turns.advance(1), PlayerId::FIRST);
        assert_eq!(turns.advance(2), PlayerId::FIRST);
        assert_eq!(turns.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let turns = TurnOrder::new(Roster::with_size(4).unwrap());
        assert_eq!(turns.previous().get(), 4);
    }
}
