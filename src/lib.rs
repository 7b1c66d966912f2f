//! # grid_astar
//!
//! Shortest paths on a rectangular grid with impassable cells using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is
//! 4-directional with unit cost and the heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), so the
//! paths found are optimal.
//!
//! Unlike a plain path query, the search leaves its bookkeeping in the grid:
//! every [Cell] keeps its g, h and f costs, its predecessor and a
//! [CellState], so explored and frontier cells can be inspected or rendered
//! with the [Display](core::fmt::Display) impl of [SearchGrid].
//!
//! Positions are [Point]s whose `x` is the column and `y` the row.
//!
//! ```
//! use grid_astar::{Point, SearchGrid, SearchOutcome};
//!
//! let mut grid = SearchGrid::new(3, 3).unwrap();
//! grid.place_obstacle(Point::new(1, 1)).unwrap();
//! grid.designate_start(Point::new(0, 0)).unwrap();
//! grid.designate_goal(Point::new(2, 2)).unwrap();
//! match grid.run_search().unwrap() {
//!     SearchOutcome::PathFound(path) => assert_eq!(path.moves(), 4),
//!     SearchOutcome::PathNotFound => unreachable!(),
//! }
//! ```
mod astar;
mod cell;
pub mod config;
pub mod error;
mod path;
mod search_grid;

pub use astar::{SearchOutcome, SearchStats};
pub use cell::{Cell, CellState};
pub use config::GridConfig;
pub use error::{ConfigError, InvariantViolation, SearchError};
pub use grid_util::point::Point;
pub use path::Path;
pub use search_grid::SearchGrid;

/// Cost of moving to an orthogonally adjacent cell.
pub const EDGE_COST: f64 = 1.0;

/// Inline capacity for neighbourhoods, which have at most 4 members.
pub(crate) const N_SMALLVEC_SIZE: usize = 4;
