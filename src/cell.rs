use core::fmt;
use grid_util::point::Point;

/// Traversal state of a [Cell]. `Start`, `Goal` and `Obstacle` are fixed labels
/// laid over the Unvisited → Frontier → Visited progression; `OnPath` is only
/// assigned by path extraction after a successful search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Unvisited,
    Frontier,
    Visited,
    Start,
    Goal,
    Obstacle,
    OnPath,
}

impl CellState {
    /// Single character used when rendering a grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Start => 'S',
            CellState::Goal => 'E',
            CellState::Obstacle => '#',
            CellState::OnPath => '@',
            CellState::Frontier => 'o',
            CellState::Visited => 'c',
            CellState::Unvisited => '.',
        }
    }

    /// States that survive [SearchGrid::reset_search](crate::SearchGrid::reset_search).
    pub fn is_label(self) -> bool {
        matches!(
            self,
            CellState::Start | CellState::Goal | CellState::Obstacle
        )
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One grid position together with its search bookkeeping. Cells are owned by
/// a [SearchGrid](crate::SearchGrid); the predecessor is an index into that
/// grid's storage and never an owning link.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    point: Point,
    pub(crate) g_cost: f64,
    pub(crate) h_cost: f64,
    pub(crate) f_cost: f64,
    pub(crate) predecessor: Option<usize>,
    pub(crate) state: CellState,
}

impl Cell {
    /// `row` and `col` fit in an i32; [SearchGrid::new](crate::SearchGrid::new)
    /// rejects larger grids.
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            point: Point::new(col as i32, row as i32),
            g_cost: f64::INFINITY,
            h_cost: f64::INFINITY,
            f_cost: f64::INFINITY,
            predecessor: None,
            state: CellState::Unvisited,
        }
    }
    /// Position of the cell, `x` being the column and `y` the row.
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn row(&self) -> usize {
        self.point.y as usize
    }
    pub fn col(&self) -> usize {
        self.point.x as usize
    }
    /// Cost of the best known path from the start, infinite until reached.
    pub fn g_cost(&self) -> f64 {
        self.g_cost
    }
    /// Manhattan estimate of the remaining distance to the goal.
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }
    pub fn f_cost(&self) -> f64 {
        self.f_cost
    }
    /// Index of the cell this one was reached from on the best known path.
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    pub fn is_obstacle(&self) -> bool {
        self.state == CellState::Obstacle
    }
    pub fn is_reached(&self) -> bool {
        self.g_cost.is_finite()
    }

    /// Records a cheaper way of reaching this cell.
    pub(crate) fn relax(&mut self, g_cost: f64, h_cost: f64, predecessor: usize) {
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.f_cost = g_cost + h_cost;
        self.predecessor = Some(predecessor);
    }

    /// Drops all search bookkeeping, keeping start, goal and obstacle labels.
    pub(crate) fn reset(&mut self) {
        self.g_cost = f64::INFINITY;
        self.h_cost = f64::INFINITY;
        self.f_cost = f64::INFINITY;
        self.predecessor = None;
        if !self.state.is_label() {
            self.state = CellState::Unvisited;
        }
    }

    /// Costs must never be NaN or negative.
    pub(crate) fn costs_valid(&self) -> bool {
        !(self.g_cost.is_nan()
            || self.h_cost.is_nan()
            || self.g_cost < 0.0
            || self.h_cost < 0.0)
    }
}
