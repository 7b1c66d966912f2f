//! A* over a [SearchGrid], recording its progress in the grid's cells so the
//! explored area can be inspected or rendered afterwards.
use crate::cell::CellState;
use crate::error::{ConfigError, InvariantViolation, SearchError};
use crate::path::Path;
use crate::search_grid::SearchGrid;
use crate::EDGE_COST;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    PathFound(Path),
    /// The frontier ran dry before the goal was reached.
    PathNotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::PathNotFound => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::PathNotFound => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound(_))
    }
}

/// Frontier entry. [BinaryHeap] is a max-heap, so the ordering is reversed:
/// the greatest entry is the one with the lowest estimated cost. Ties go to
/// the lower heuristic (the entry deeper into the search), then to the lower
/// row, then to the lower column, which makes every search reproducible.
struct SmallestCostHolder {
    estimated_cost: f64,
    heuristic: f64,
    cost: f64,
    row: usize,
    col: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.heuristic.total_cmp(&self.heuristic))
            .then_with(|| other.row.cmp(&self.row))
            .then_with(|| other.col.cmp(&self.col))
    }
}

/// Counters kept while searching, logged when the search ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells taken off the frontier and marked visited.
    pub expanded: usize,
    /// Entries pushed onto the frontier, duplicates included.
    pub pushed: usize,
    /// Outdated duplicate entries discarded on pop.
    pub stale: usize,
}

impl SearchGrid {
    /// Manhattan distance between two cells, admissible and consistent for
    /// unit-cost 4-directional movement.
    fn heuristic(&self, ix: usize, goal: usize) -> f64 {
        let p = self.cells[ix].point();
        p.manhattan_distance(&self.cells[goal].point()) as f64
    }

    fn holder(&self, index: usize) -> SmallestCostHolder {
        let cell = &self.cells[index];
        SmallestCostHolder {
            estimated_cost: cell.f_cost,
            heuristic: cell.h_cost,
            cost: cell.g_cost,
            row: cell.row(),
            col: cell.col(),
            index,
        }
    }

    fn check_costs(&self, ix: usize) -> Result<(), InvariantViolation> {
        let cell = &self.cells[ix];
        if cell.costs_valid() {
            Ok(())
        } else {
            warn!(
                "Invalid cost on {}: g={}, h={}",
                cell.point(),
                cell.g_cost,
                cell.h_cost
            );
            Err(InvariantViolation::InvalidCost {
                point: cell.point(),
                g: cell.g_cost,
                h: cell.h_cost,
            })
        }
    }

    /// Runs A* from the designated start to the designated goal.
    ///
    /// Any state left by an earlier search is cleared first, so repeated calls
    /// on an unchanged grid give identical results. On success the cells of
    /// the path between start and goal are marked [CellState::OnPath]; in
    /// either case the explored cells stay [CellState::Visited] or
    /// [CellState::Frontier] for inspection.
    pub fn run_search(&mut self) -> Result<SearchOutcome, SearchError> {
        self.run_search_with_stats().map(|(outcome, _)| outcome)
    }

    /// [run_search](Self::run_search), also returning the search counters.
    pub fn run_search_with_stats(
        &mut self,
    ) -> Result<(SearchOutcome, SearchStats), SearchError> {
        let start = self.start.ok_or(ConfigError::MissingStart)?;
        let goal = self.goal.ok_or(ConfigError::MissingGoal)?;
        for ix in [start, goal] {
            if self.cells[ix].is_obstacle() {
                let point = self.cells[ix].point();
                return Err(ConfigError::BlockedEndpoint { point }.into());
            }
        }
        info!(
            "Searching {}x{} grid from {} to {}",
            self.rows(),
            self.cols(),
            self.cells[start].point(),
            self.cells[goal].point()
        );
        self.reset_search();

        let h = self.heuristic(start, goal);
        let start_cell = &mut self.cells[start];
        start_cell.g_cost = 0.0;
        start_cell.h_cost = h;
        start_cell.f_cost = h;

        self.expand_frontier(start, goal, self.len())
    }

    /// Main loop, starting from the already seeded start cell. Expanding more
    /// than `limit` cells is reported as a broken invariant.
    fn expand_frontier(
        &mut self,
        start: usize,
        goal: usize,
        limit: usize,
    ) -> Result<(SearchOutcome, SearchStats), SearchError> {
        let mut stats = SearchStats::default();
        let mut to_see = BinaryHeap::new();
        to_see.push(self.holder(start));
        stats.pushed += 1;

        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            // A cell may have been pushed several times if a cheaper way to it
            // was found. Only the entry matching its current cost is live, and
            // a visited cell is never reopened.
            let cell = &self.cells[index];
            if cell.state == CellState::Visited || cost > cell.g_cost {
                stats.stale += 1;
                continue;
            }
            self.check_costs(index)?;
            if index == goal {
                debug!("Goal reached: {stats:?}");
                let path = self.extract_path(start, goal)?;
                info!("Path found with {} moves", path.moves());
                return Ok((SearchOutcome::PathFound(path), stats));
            }
            stats.expanded += 1;
            if stats.expanded > limit {
                warn!("Expanded {} cells on a grid of {limit}", stats.expanded);
                return Err(InvariantViolation::ExpansionLimit { limit }.into());
            }
            if self.cells[index].state != CellState::Start {
                self.cells[index].state = CellState::Visited;
            }

            let tentative_g = cost + EDGE_COST;
            for n in self.neighbors(index) {
                let neighbour = &self.cells[n];
                if matches!(neighbour.state, CellState::Obstacle | CellState::Visited)
                    || tentative_g >= neighbour.g_cost
                {
                    continue;
                }
                let h = self.heuristic(n, goal);
                let neighbour = &mut self.cells[n];
                neighbour.relax(tentative_g, h, index);
                if neighbour.state == CellState::Unvisited {
                    neighbour.state = CellState::Frontier;
                }
                to_see.push(self.holder(n));
                stats.pushed += 1;
            }
        }
        info!("Frontier exhausted, no path: {stats:?}");
        Ok((SearchOutcome::PathNotFound, stats))
    }
}
