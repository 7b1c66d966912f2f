use grid_astar::{CellState, GridConfig, Point, SearchGrid, SearchOutcome};

fn open_grid(rows: usize, cols: usize, start: Point, goal: Point) -> SearchGrid {
    let mut grid = SearchGrid::new(rows, cols).unwrap();
    grid.designate_start(start).unwrap();
    grid.designate_goal(goal).unwrap();
    grid
}

/// Every step of the path moves to an orthogonal neighbour, the endpoints keep
/// their labels and everything in between is marked as on the path.
fn assert_connected(grid: &SearchGrid, points: &[Point]) {
    for pair in points.windows(2) {
        let d = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(d, 1, "{} and {} are not adjacent", pair[0], pair[1]);
    }
    assert_eq!(grid.state(points[0]), Some(CellState::Start));
    assert_eq!(grid.state(points[points.len() - 1]), Some(CellState::Goal));
    for p in &points[1..points.len() - 1] {
        assert_eq!(grid.state(*p), Some(CellState::OnPath));
    }
    let on_path = grid
        .cells()
        .filter(|c| c.state() == CellState::OnPath)
        .count();
    assert_eq!(on_path, points.len() - 2);
}

#[test]
fn open_5x5_corner_to_corner() {
    let mut grid = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
    let path = grid.run_search().unwrap().into_path().unwrap();
    assert_eq!(path.moves(), 8);
    assert_eq!(path.cost(), 8.0);
    assert_connected(&grid, path.points());
}

#[test]
fn open_grids_match_manhattan_distance() {
    for (rows, cols) in [(1, 7), (4, 4), (6, 3), (9, 11)] {
        for (s, g) in [
            ((0, 0), (rows - 1, cols - 1)),
            ((rows - 1, 0), (0, cols - 1)),
            ((rows / 2, cols / 2), (0, 0)),
        ] {
            if s == g {
                continue;
            }
            let start = Point::new(s.1 as i32, s.0 as i32);
            let goal = Point::new(g.1 as i32, g.0 as i32);
            let mut grid = open_grid(rows, cols, start, goal);
            let path = grid.run_search().unwrap().into_path().unwrap();
            let manhattan = (start.x - goal.x).abs() + (start.y - goal.y).abs();
            assert_eq!(path.moves() as i32, manhattan);
            assert_connected(&grid, path.points());
        }
    }
}

#[test]
fn wall_forces_route_through_gap() {
    // S . . . .
    // . . . . .
    // . # # # #
    // . . . . .
    // . . . . E
    let config = GridConfig::new(5, 5)
        .with_start(0, 2)
        .with_goal(4, 2)
        .with_obstacles((1..5).map(|col| (2, col)));
    let mut grid = config.build().unwrap();
    let path = grid.run_search().unwrap().into_path().unwrap();
    assert!(path.points().contains(&Point::new(0, 2)));
    assert_eq!(grid.state(Point::new(0, 2)), Some(CellState::OnPath));
    assert_eq!(path.moves(), 8);
    assert_connected(&grid, path.points());
}

#[test]
fn boxed_in_goal_is_not_found() {
    let config = GridConfig::from_ascii(
        "
S......
...#...
..#E#..
...#...
.......
",
    )
    .unwrap();
    let mut grid = config.build().unwrap();
    assert_eq!(grid.run_search().unwrap(), SearchOutcome::PathNotFound);
    let goal = grid.goal().unwrap();
    assert!(grid.cell(goal).unwrap().g_cost().is_infinite());
    assert!(grid.cells().all(|c| c.state() != CellState::OnPath));
    assert!(!grid.reachable(&grid.start().unwrap(), &goal));
}

#[test]
fn enclosure_is_not_explored() {
    // The goal sits in a closed 3x3 room; nothing inside the walls may be touched.
    let config = GridConfig::from_ascii(
        "
S........
.........
....#####
....#...#
....#.E.#
....#...#
....#####
",
    )
    .unwrap();
    let mut grid = config.build().unwrap();
    assert!(!grid.run_search().unwrap().is_found());
    for cell in grid.cells() {
        let inside = (3..=5).contains(&cell.row()) && (5..=7).contains(&cell.col());
        if inside {
            assert!(
                matches!(cell.state(), CellState::Unvisited | CellState::Goal),
                "{:?} inside the enclosure was explored",
                cell.point()
            );
            assert!(cell.predecessor().is_none());
        } else if !cell.is_obstacle() {
            assert!(matches!(
                cell.state(),
                CellState::Visited | CellState::Start
            ));
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut grid = GridConfig::default().build().unwrap();
    let first = grid.run_search().unwrap().into_path().unwrap();
    let rendered = grid.to_string();
    for _ in 0..3 {
        let again = grid.run_search().unwrap().into_path().unwrap();
        assert_eq!(again.points(), first.points());
        assert_eq!(grid.to_string(), rendered);
    }
    let mut fresh = GridConfig::default().build().unwrap();
    let other = fresh.run_search().unwrap().into_path().unwrap();
    assert_eq!(other.points(), first.points());
}

#[test]
fn reset_restores_initial_state() {
    let mut grid = GridConfig::default().build().unwrap();
    let before = grid.cells().cloned().collect::<Vec<_>>();
    grid.run_search().unwrap();
    assert_ne!(grid.cells().cloned().collect::<Vec<_>>(), before);
    grid.reset_search();
    assert_eq!(grid.cells().cloned().collect::<Vec<_>>(), before);
}

#[test]
fn default_layout_goes_around_both_walls() {
    let mut grid = GridConfig::default().build().unwrap();
    let path = grid.run_search().unwrap().into_path().unwrap();
    // Manhattan distance is 12 + 17; the walls are passable through the top
    // two or bottom two rows, so the detour is free.
    assert_eq!(path.moves(), 29);
    assert!(path
        .points()
        .iter()
        .all(|p| !grid.is_obstacle(*p)));
    assert_connected(&grid, path.points());
}

#[test]
fn redesignated_goal_is_used() {
    let mut grid = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
    grid.designate_goal(Point::new(2, 0)).unwrap();
    let path = grid.run_search().unwrap().into_path().unwrap();
    assert_eq!(path.goal(), Some(Point::new(2, 0)));
    assert_eq!(path.moves(), 2);
    assert_eq!(grid.state(Point::new(2, 2)), Some(CellState::Unvisited));
}
