//! Error types for grid setup and search.
//!
//! Not finding a path is not an error: it is reported as
//! [SearchOutcome::PathNotFound](crate::SearchOutcome::PathNotFound).

use grid_util::point::Point;
use std::fmt;

/// Invalid grid setup, detected before any search work is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid needs at least one row and one column.
    EmptyGrid { rows: usize, cols: usize },
    /// A dimension does not fit in a [Point] coordinate.
    GridTooLarge { rows: usize, cols: usize },
    /// The point lies outside the grid.
    OutOfBounds {
        point: Point,
        rows: usize,
        cols: usize,
    },
    /// Start or goal was requested on an obstacle.
    BlockedEndpoint { point: Point },
    /// The cell already carries the start or goal designation.
    OccupiedByEndpoint { point: Point },
    MissingStart,
    MissingGoal,
    /// An ASCII map could not be read.
    MalformedMap { line: usize, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one cell, got {rows}x{cols}")
            }
            Self::GridTooLarge { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells is too large")
            }
            Self::OutOfBounds { point, rows, cols } => write!(
                f,
                "point {point} (row {}, col {}) is outside the {rows}x{cols} grid",
                point.y, point.x
            ),
            Self::BlockedEndpoint { point } => {
                write!(f, "start or goal at {point} is an obstacle")
            }
            Self::OccupiedByEndpoint { point } => {
                write!(f, "cell {point} is already the start or the goal")
            }
            Self::MissingStart => write!(f, "no start cell designated"),
            Self::MissingGoal => write!(f, "no goal cell designated"),
            Self::MalformedMap { line, reason } => {
                write!(f, "malformed map at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A broken engine invariant. Seeing one of these means the search itself is
/// defective; the partially updated grid must not be trusted.
#[derive(Clone, Debug, PartialEq)]
pub enum InvariantViolation {
    /// The predecessor chain from the goal does not lead back to the start.
    BrokenChain { point: Point },
    /// A cost that is NaN or negative was observed on a cell.
    InvalidCost { point: Point, g: f64, h: f64 },
    /// More cells were expanded than the grid holds.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenChain { point } => {
                write!(f, "predecessor chain broken at {point}")
            }
            Self::InvalidCost { point, g, h } => {
                write!(f, "invalid cost at {point}: g={g}, h={h}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search expanded more than {limit} cells")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Everything [SearchGrid::run_search](crate::SearchGrid::run_search) can fail with.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    Config(ConfigError),
    Invariant(InvariantViolation),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Invariant(e) => write!(f, "internal invariant violation: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<InvariantViolation> for SearchError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}
