//! Core domain types for dots and boxes.

use super::action::GameError;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player, numbered from 1 in roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1, who always moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Creates a player id. Ids start at 1.
    pub fn new(id: u8) -> Option<Self> {
        (id >= 1).then_some(Self(id))
    }

    /// Returns the numeric id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The id that follows this one in a roster.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(GameError::InvalidPlayerId(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Direction of an edge between two adjacent dots.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Joins two dots in the same row.
    #[strum(serialize = "h")]
    Horizontal,
    /// Joins two dots in the same column.
    #[strum(serialize = "v")]
    Vertical,
}

/// A claimable edge.
///
/// Horizontal edges have `row` in `0..=N` and `col` in `0..N`; vertical edges
/// have `row` in `0..N` and `col` in `0..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Edge {
    /// Direction of the edge.
    pub orientation: Orientation,
    /// Row in the orientation's grid.
    pub row: usize,
    /// Column in the orientation's grid.
    pub col: usize,
}

impl Edge {
    /// Creates a horizontal edge.
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    /// Creates a vertical edge.
    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.orientation, self.row, self.col)
    }
}

/// A unit cell of the grid, identified by its top-left dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct BoxCoord {
    /// Row of the box.
    pub row: usize,
    /// Column of the box.
    pub col: usize,
}

impl BoxCoord {
    /// The four edges bounding this box: top, bottom, left, right.
    pub fn edges(self) -> [Edge; 4] {
        [
            Edge::horizontal(self.row, self.col),
            Edge::horizontal(self.row + 1, self.col),
            Edge::vertical(self.row, self.col),
            Edge::vertical(self.row, self.col + 1),
        ]
    }
}

impl std::fmt::Display for BoxCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
