use crate::cell::{Cell, CellState};
use crate::error::ConfigError;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Row and column offsets of the 4-neighbourhood, in the order up, right,
/// down, left. Search results depend on this order only through tie-breaking.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// [SearchGrid] owns a fixed rectangle of [Cell]s stored row-major, records
/// which cells are the start and the goal, and maintains a [UnionFind] of
/// 4-connected free cells that can answer reachability queries independently
/// of the search.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: Option<usize>,
    pub(crate) goal: Option<usize>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl SearchGrid {
    /// Creates a `rows` x `cols` grid of unvisited cells with infinite costs.
    pub fn new(rows: usize, cols: usize) -> Result<SearchGrid, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        // Coordinates are stored as i32 points.
        if i32::try_from(rows).is_err()
            || i32::try_from(cols).is_err()
            || rows.checked_mul(cols).is_none()
        {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<_>>();
        Ok(SearchGrid {
            rows,
            cols,
            cells,
            start: None,
            goal: None,
            components: UnionFind::new(rows * cols),
            components_dirty: true,
        })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.y as usize) < self.rows
            && (point.x as usize) < self.cols
    }
    /// Row-major index of an in-bounds point.
    pub fn get_ix_point(&self, point: &Point) -> Option<usize> {
        self.point_in_bounds(*point)
            .then(|| point.y as usize * self.cols + point.x as usize)
    }
    fn checked_ix(&self, point: Point) -> Result<usize, ConfigError> {
        self.get_ix_point(&point).ok_or(ConfigError::OutOfBounds {
            point,
            rows: self.rows,
            cols: self.cols,
        })
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.get_ix_point(&point).map(|ix| &self.cells[ix])
    }
    /// Cell by row-major index, as used by [Cell::predecessor].
    pub fn cell_at(&self, ix: usize) -> Option<&Cell> {
        self.cells.get(ix)
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }
    pub fn state(&self, point: Point) -> Option<CellState> {
        self.cell(point).map(Cell::state)
    }
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.cell(point).map_or(false, Cell::is_obstacle)
    }
    pub fn start(&self) -> Option<Point> {
        self.start.map(|ix| self.cells[ix].point())
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal.map(|ix| self.cells[ix].point())
    }

    /// Blocks a cell. Placing an obstacle twice is a no-op, placing one on the
    /// start or the goal is rejected.
    pub fn place_obstacle(&mut self, point: Point) -> Result<(), ConfigError> {
        let ix = self.checked_ix(point)?;
        match self.cells[ix].state {
            CellState::Start | CellState::Goal => {
                Err(ConfigError::OccupiedByEndpoint { point })
            }
            CellState::Obstacle => Ok(()),
            _ => {
                self.cells[ix].reset();
                self.cells[ix].state = CellState::Obstacle;
                self.components_dirty = true;
                Ok(())
            }
        }
    }
    /// Frees a previously blocked cell. Joins it with its free neighbours'
    /// components instead of regenerating them.
    pub fn clear_obstacle(&mut self, point: Point) -> Result<(), ConfigError> {
        let ix = self.checked_ix(point)?;
        if self.cells[ix].is_obstacle() {
            self.cells[ix].state = CellState::Unvisited;
            for n in self.neighbors(ix) {
                if !self.cells[n].is_obstacle() {
                    self.components.union(ix, n);
                }
            }
        }
        Ok(())
    }
    pub fn designate_start(&mut self, point: Point) -> Result<(), ConfigError> {
        let ix = self.endpoint_ix(point, self.goal)?;
        if let Some(old) = self.start.replace(ix) {
            self.cells[old].state = CellState::Unvisited;
        }
        self.cells[ix].state = CellState::Start;
        Ok(())
    }
    pub fn designate_goal(&mut self, point: Point) -> Result<(), ConfigError> {
        let ix = self.endpoint_ix(point, self.start)?;
        if let Some(old) = self.goal.replace(ix) {
            self.cells[old].state = CellState::Unvisited;
        }
        self.cells[ix].state = CellState::Goal;
        Ok(())
    }
    /// Validates a start or goal candidate against bounds, obstacles and the
    /// opposite endpoint.
    fn endpoint_ix(&self, point: Point, other: Option<usize>) -> Result<usize, ConfigError> {
        let ix = self.checked_ix(point)?;
        if self.cells[ix].is_obstacle() {
            return Err(ConfigError::BlockedEndpoint { point });
        }
        if other == Some(ix) {
            return Err(ConfigError::OccupiedByEndpoint { point });
        }
        Ok(ix)
    }

    /// Orthogonally adjacent in-bounds cells, obstacles included.
    pub fn neighbors(&self, ix: usize) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        let point = self.cells[ix].point();
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| {
                self.get_ix_point(&Point::new(point.x + d_col, point.y + d_row))
            })
            .collect()
    }

    /// Returns every cell to its pre-search state: infinite costs, no
    /// predecessor, and Unvisited unless it is the start, goal or an obstacle.
    pub fn reset_search(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Checks if two points are free and on the same 4-connected component.
    /// Regenerates the components first if obstacles were placed since.
    pub fn reachable(&mut self, a: &Point, b: &Point) -> bool {
        self.update();
        match (self.get_ix_point(a), self.get_ix_point(b)) {
            (Some(a_ix), Some(b_ix)) => {
                !self.cells[a_ix].is_obstacle()
                    && !self.cells[b_ix].is_obstacle()
                    && self.components.equiv(a_ix, b_ix)
            }
            _ => false,
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up free grid neighbours
    /// to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components for {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_obstacle() {
                continue;
            }
            // Linking right and down covers every edge once.
            let point = self.cells[ix].point();
            for p in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if let Some(n) = self.get_ix_point(&p) {
                    if !self.cells[n].is_obstacle() {
                        self.components.union(ix, n);
                    }
                }
            }
        }
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|c| c.state().symbol()).join(" "))?;
        }
        Ok(())
    }
}
