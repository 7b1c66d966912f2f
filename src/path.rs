use crate::cell::CellState;
use crate::error::InvariantViolation;
use crate::search_grid::SearchGrid;
use grid_util::point::Point;
use log::warn;

/// A shortest path from start to goal, both included.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
}

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
    /// Number of moves, one less than the number of cells.
    pub fn moves(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
    /// Accumulated cost, equal to [moves](Self::moves) under unit edge costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }
    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl SearchGrid {
    /// Follows predecessors back from the goal, marking every cell strictly
    /// between goal and start as [CellState::OnPath].
    ///
    /// Only meaningful once a search has reached the goal. The walk is bounded
    /// by the number of cells; a chain that is longer or ends before the start
    /// is reported as a broken invariant.
    pub(crate) fn extract_path(
        &mut self,
        start: usize,
        goal: usize,
    ) -> Result<Path, InvariantViolation> {
        let mut path = vec![self.cells[goal].point()];
        let mut current = goal;
        for _ in 0..self.len() {
            let Some(prev) = self.cells[current].predecessor else {
                return Err(self.broken_chain(current));
            };
            path.push(self.cells[prev].point());
            if prev == start {
                path.reverse();
                return Ok(Path {
                    points: path,
                    cost: self.cells[goal].g_cost,
                });
            }
            self.cells[prev].state = CellState::OnPath;
            current = prev;
        }
        Err(self.broken_chain(current))
    }

    fn broken_chain(&self, ix: usize) -> InvariantViolation {
        let point = self.cells[ix].point();
        warn!("Predecessor chain broken at {point}");
        InvariantViolation::BrokenChain { point }
    }
}
