//! Grid layouts supplied by the caller: size, endpoints and obstacles, either
//! listed explicitly or read from an ASCII map.
use crate::error::ConfigError;
use crate::search_grid::SearchGrid;
use grid_util::point::Point;
use log::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to set up a [SearchGrid]. Positions are `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Option<(usize, usize)>,
    pub goal: Option<(usize, usize)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<(usize, usize)>,
}

impl Default for GridConfig {
    /// A 15x20 grid searched from near the top-left to near the bottom-right
    /// corner, split by two vertical walls that leave the top and bottom two
    /// rows open.
    fn default() -> Self {
        let rows = 15;
        let cols = 20;
        let obstacles = (2..rows - 2)
            .flat_map(|row| [(row, 5), (row, 10)])
            .collect();
        Self {
            rows,
            cols,
            start: Some((1, 1)),
            goal: Some((rows - 2, cols - 2)),
            obstacles,
        }
    }
}

/// Coordinates beyond the i32 range saturate, which no grid contains, so the
/// grid reports them as out of bounds instead of wrapping onto another cell.
fn to_point((row, col): (usize, usize)) -> Point {
    let saturate = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
    Point::new(saturate(col), saturate(row))
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            start: None,
            goal: None,
            obstacles: Vec::new(),
        }
    }
    pub fn with_start(mut self, row: usize, col: usize) -> Self {
        self.start = Some((row, col));
        self
    }
    pub fn with_goal(mut self, row: usize, col: usize) -> Self {
        self.goal = Some((row, col));
        self
    }
    pub fn with_obstacle(mut self, row: usize, col: usize) -> Self {
        self.obstacles.push((row, col));
        self
    }
    pub fn with_obstacles<I>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.obstacles.extend(obstacles);
        self
    }

    /// Reads a map with one line per row. `.` is free, `#`, `@` and `T` are
    /// obstacles, `S` marks the start and `E` or `G` the goal. Blank lines at
    /// either end are ignored; surrounding whitespace on a line is not.
    pub fn from_ascii(map: &str) -> Result<Self, ConfigError> {
        let lines = map
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .collect::<Vec<_>>();
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];
        let malformed =
            |line: usize, reason: String| ConfigError::MalformedMap { line, reason };

        let cols = lines.first().map_or(0, |l| l.chars().count());
        if cols == 0 {
            return Err(malformed(1, "map is empty".to_owned()));
        }
        let mut config = GridConfig::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(malformed(
                    row + 1,
                    format!("expected {cols} columns, found {width}"),
                ));
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    '.' => {}
                    '#' | '@' | 'T' => config.obstacles.push((row, col)),
                    'S' if config.start.is_none() => config.start = Some((row, col)),
                    'E' | 'G' if config.goal.is_none() => config.goal = Some((row, col)),
                    'S' | 'E' | 'G' => {
                        return Err(malformed(row + 1, format!("second '{c}' at column {col}")))
                    }
                    _ => {
                        return Err(malformed(
                            row + 1,
                            format!("unknown symbol '{c}' at column {col}"),
                        ))
                    }
                }
            }
        }
        Ok(config)
    }

    /// Creates the grid, places the obstacles and designates the endpoints.
    /// Endpoints are optional here; a missing one is reported when searching.
    pub fn build(&self) -> Result<SearchGrid, ConfigError> {
        info!(
            "Building {}x{} grid with {} obstacles",
            self.rows,
            self.cols,
            self.obstacles.len()
        );
        let mut grid = SearchGrid::new(self.rows, self.cols)?;
        for &obstacle in &self.obstacles {
            let point = to_point(obstacle);
            if Some(obstacle) == self.start || Some(obstacle) == self.goal {
                return Err(ConfigError::BlockedEndpoint { point });
            }
            grid.place_obstacle(point)?;
        }
        if let Some(start) = self.start {
            grid.designate_start(to_point(start))?;
        }
        if let Some(goal) = self.goal {
            grid.designate_goal(to_point(goal))?;
        }
        grid.generate_components();
        Ok(grid)
    }
}
