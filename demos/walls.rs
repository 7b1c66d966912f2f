use grid_astar::{GridConfig, SearchOutcome};
use std::process::ExitCode;

// Runs the search on a map read from the file given as first argument, or on
// the default 15x20 layout with two walls, and prints the grid before and
// after. Set RUST_LOG=debug to see the search statistics.
//
// Legend: S start, E end, # wall, @ path, o frontier, c visited, . untouched

fn main() -> ExitCode {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(file) => match std::fs::read_to_string(&file)
            .map_err(|e| e.to_string())
            .and_then(|map| GridConfig::from_ascii(&map).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load {file}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GridConfig::default(),
    };
    let mut grid = match config.build() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid layout: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Initial grid:\n{grid}");
    match grid.run_search() {
        Ok(SearchOutcome::PathFound(path)) => {
            println!("Path found with {} moves:\n{grid}", path.moves());
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::PathNotFound) => {
            println!("Path not found, the goal is inaccessible:\n{grid}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Search failed: {e}");
            ExitCode::FAILURE
        }
    }
}
