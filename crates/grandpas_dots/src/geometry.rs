//! Grid geometry for an N×N board of boxes.
//!
//! A board of size `N` has `(N + 1)²` dots, `(N + 1) · N` horizontal edges,
//! `N · (N + 1)` vertical edges and `N²` boxes. Everything here is a pure
//! function of the size.

use super::action::GameError;
use super::types::{BoxCoord, Edge, Orientation};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board, counted in boxes.
///
/// Always between 1 and [`BoardSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The 3x3 board offered when nothing else is chosen.
    pub const DEFAULT: BoardSize = BoardSize(3);

    /// The largest board, about two million edges.
    pub const MAX: usize = 1024;

    /// Validates and wraps a board size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for zero or anything above
    /// [`BoardSize::MAX`].
    #[instrument]
    pub fn new(n: usize) -> Result<Self, GameError> {
        if n == 0 || n > Self::MAX {
            return Err(GameError::InvalidBoardSize(n));
        }
        Ok(Self(n))
    }

    /// Returns the size as a plain number.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of rows holding edges of the given orientation.
    pub fn edge_rows(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.0 + 1,
            Orientation::Vertical => self.0,
        }
    }

    /// Number of columns holding edges of the given orientation.
    pub fn edge_cols(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.0,
            Orientation::Vertical => self.0 + 1,
        }
    }

    /// Number of edges of one orientation.
    pub fn edge_count(self, orientation: Orientation) -> usize {
        self.edge_rows(orientation) * self.edge_cols(orientation)
    }

    /// Number of edges of both orientations.
    pub fn total_edges(self) -> usize {
        self.edge_count(Orientation::Horizontal) + self.edge_count(Orientation::Vertical)
    }

    /// Number of boxes.
    pub fn box_count(self) -> usize {
        self.0 * self.0
    }

    /// Returns true if the edge lies on this board.
    pub fn contains_edge(self, edge: Edge) -> bool {
        edge.row < self.edge_rows(edge.orientation) && edge.col < self.edge_cols(edge.orientation)
    }

    /// Returns true if the box lies on this board.
    pub fn contains_box(self, coord: BoxCoord) -> bool {
        coord.row < self.0 && coord.col < self.0
    }

    /// Row-major index of an edge within its orientation's grid.
    pub(crate) fn edge_index(self, edge: Edge) -> Option<usize> {
        self.contains_edge(edge)
            .then(|| edge.row * self.edge_cols(edge.orientation) + edge.col)
    }

    /// Row-major index of a box.
    pub(crate) fn box_index(self, coord: BoxCoord) -> Option<usize> {
        self.contains_box(coord).then(|| coord.row * self.0 + coord.col)
    }

    /// The boxes touching an edge: one on the border, two inside.
    ///
    /// Horizontal edges touch the box above and below, vertical edges the box
    /// to the left and right.
    pub fn adjacent_boxes(self, edge: Edge) -> Vec<BoxCoord> {
        let (before, after) = match edge.orientation {
            Orientation::Horizontal => (
                edge.row.checked_sub(1).map(|row| BoxCoord::new(row, edge.col)),
                BoxCoord::new(edge.row, edge.col),
            ),
            Orientation::Vertical => (
                edge.col.checked_sub(1).map(|col| BoxCoord::new(edge.row, col)),
                BoxCoord::new(edge.row, edge.col),
            ),
        };
        before
            .into_iter()
            .chain(std::iter::once(after))
            .filter(|coord| self.contains_box(*coord))
            .collect()
    }

    /// Every edge on the board, horizontals first, each in row-major order.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        <Orientation as strum::IntoEnumIterator>::iter().flat_map(move |orientation| {
            let cols = self.edge_cols(orientation);
            (0..self.edge_rows(orientation)).flat_map(move |row| {
                (0..cols).map(move |col| Edge::new(orientation, row, col))
            })
        })
    }

    /// Every box on the board in row-major order.
    pub fn boxes(self) -> impl Iterator<Item = BoxCoord> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| BoxCoord::new(row, col)))
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GameError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
