//! Edge and box ownership for one game.

use super::action::GameError;
use super::geometry::BoardSize;
use super::types::{BoxCoord, Edge, Orientation, PlayerId};
use serde::Serialize;
use tracing::{debug, instrument};

/// Ownership grids for an N×N board.
///
/// Edges and boxes start unclaimed and never change owner once claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Horizontal edges, `(N + 1)` rows of `N`, row-major.
    horizontal: Vec<Option<PlayerId>>,
    /// Vertical edges, `N` rows of `(N + 1)`, row-major.
    vertical: Vec<Option<PlayerId>>,
    /// Boxes, `N` rows of `N`, row-major.
    boxes: Vec<Option<PlayerId>>,
}

impl Board {
    /// Creates a board with every edge and box unclaimed.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            horizontal: vec![None; size.edge_count(Orientation::Horizontal)],
            vertical: vec![None; size.edge_count(Orientation::Vertical)],
            boxes: vec![None; size.box_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    fn edges_of(&self, orientation: Orientation) -> &[Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Owner of an edge, or `None` if unclaimed or off the board.
    pub fn edge_owner(&self, edge: Edge) -> Option<PlayerId> {
        let idx = self.size.edge_index(edge)?;
        self.edges_of(edge.orientation)[idx]
    }

    /// Returns true if the edge is on the board and has an owner.
    pub fn is_claimed(&self, edge: Edge) -> bool {
        self.edge_owner(edge).is_some()
    }

    /// Owner of a box, or `None` if unclaimed or off the board.
    pub fn box_owner(&self, coord: BoxCoord) -> Option<PlayerId> {
        let idx = self.size.box_index(coord)?;
        self.boxes[idx]
    }

    /// Returns true if all four edges around the box are claimed.
    ///
    /// Who owns the edges does not matter.
    pub fn is_box_closed(&self, coord: BoxCoord) -> bool {
        self.size.contains_box(coord) && coord.edges().iter().all(|edge| self.is_claimed(*edge))
    }

    /// Claims an edge for a player and any boxes it closes.
    ///
    /// Returns the boxes completed by this claim: none, one, or two when the
    /// edge is the last shared side of both its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] for an edge off the board and
    /// [`GameError::EdgeAlreadyClaimed`] for an owned edge. The board is
    /// unchanged on error.
    #[instrument(skip(self), fields(edge = %edge, player = %player))]
    pub fn claim_edge(&mut self, edge: Edge, player: PlayerId) -> Result<Vec<BoxCoord>, GameError> {
        let idx = self
            .size
            .edge_index(edge)
            .ok_or(GameError::InvalidCoordinate(edge))?;
        let slot = match edge.orientation {
            Orientation::Horizontal => &mut self.horizontal[idx],
            Orientation::Vertical => &mut self.vertical[idx],
        };
        if slot.is_some() {
            return Err(GameError::EdgeAlreadyClaimed(edge));
        }
        *slot = Some(player);

        let mut completed = Vec::new();
        for coord in self.size.adjacent_boxes(edge) {
            if self.box_owner(coord).is_none()
                && self.is_box_closed(coord)
                && let Some(box_idx) = self.size.box_index(coord)
            {
                self.boxes[box_idx] = Some(player);
                completed.push(coord);
            }
        }
        if !completed.is_empty() {
            debug!(count = completed.len(), "Boxes completed");
        }
        Ok(completed)
    }

    /// Returns true once every edge is claimed.
    ///
    /// This is the game-over rule.
    pub fn is_complete(&self) -> bool {
        self.horizontal.iter().chain(&self.vertical).all(Option::is_some)
    }

    /// Number of claimed edges.
    pub fn claimed_edges(&self) -> usize {
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .filter(|owner| owner.is_some())
            .count()
    }

    /// Number of claimed boxes.
    pub fn claimed_boxes(&self) -> usize {
        self.boxes.iter().filter(|owner| owner.is_some()).count()
    }

    /// Number of boxes owned by a player.
    pub fn boxes_owned_by(&self, player: PlayerId) -> usize {
        self.boxes.iter().filter(|owner| **owner == Some(player)).count()
    }

    /// Edges still open for a claim.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.size.edges().filter(|edge| !self.is_claimed(*edge))
    }

    /// Edge owners as rows for one orientation.
    pub fn edge_rows(&self, orientation: Orientation) -> Vec<Vec<Option<PlayerId>>> {
        self.edges_of(orientation)
            .chunks(self.size.edge_cols(orientation))
            .map(<[_]>::to_vec)
            .collect()
    }

    /// Box owners as rows.
    pub fn box_rows(&self) -> Vec<Vec<Option<PlayerId>>> {
        self.boxes.chunks(self.size.get()).map(<[_]>::to_vec).collect()
    }

    /// Overwrites a box owner, bypassing the rules. Used to corrupt boards
    /// in invariant tests.
    #[cfg(test)]
    pub(crate) fn set_box_owner(&mut self, coord: BoxCoord, owner: Option<PlayerId>) {
        if let Some(idx) = self.size.box_index(coord) {
            self.boxes[idx] = owner;
        }
    }
}
