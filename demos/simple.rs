use grid_astar::{Point, SearchGrid, SearchOutcome};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = SearchGrid::new(3, 3).unwrap();
    grid.place_obstacle(Point::new(1, 1)).unwrap();
    grid.designate_start(Point::new(0, 0)).unwrap();
    grid.designate_goal(Point::new(2, 2)).unwrap();
    println!("{}", grid);
    match grid.run_search().unwrap() {
        SearchOutcome::PathFound(path) => {
            println!("Path:");
            for p in path.points() {
                println!("{:?}", p);
            }
        }
        SearchOutcome::PathNotFound => println!("No path"),
    }
}
