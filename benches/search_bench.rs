use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{GridConfig, Point, SearchGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn open_grid(n: usize) -> SearchGrid {
    GridConfig::new(n, n)
        .with_start(0, 0)
        .with_goal(n - 1, n - 1)
        .build()
        .unwrap()
}

fn random_grid(n: usize, rng: &mut StdRng) -> SearchGrid {
    let mut grid = SearchGrid::new(n, n).unwrap();
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            if rng.gen_bool(0.3) {
                grid.place_obstacle(Point::new(x, y)).unwrap();
            }
        }
    }
    let start = Point::new(0, 0);
    let goal = Point::new(n as i32 - 1, n as i32 - 1);
    grid.clear_obstacle(start).unwrap();
    grid.clear_obstacle(goal).unwrap();
    grid.designate_start(start).unwrap();
    grid.designate_goal(goal).unwrap();
    grid
}

fn open_bench(c: &mut Criterion) {
    for n in [16, 64, 256] {
        let mut grid = open_grid(n);
        c.bench_function(format!("open {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(grid.run_search().unwrap()))
        });
    }
}

fn random_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [16, 64, 256] {
        let mut grids = (0..8).map(|_| random_grid(n, &mut rng)).collect::<Vec<_>>();
        c.bench_function(format!("random {n}x{n}, 30% blocked").as_str(), |b| {
            b.iter(|| {
                for grid in grids.iter_mut() {
                    black_box(grid.run_search().unwrap());
                }
            })
        });
    }
}

fn default_layout_bench(c: &mut Criterion) {
    let mut grid = GridConfig::default().build().unwrap();
    c.bench_function("default layout", |b| {
        b.iter(|| black_box(grid.run_search().unwrap()))
    });
}

criterion_group!(benches, open_bench, random_bench, default_layout_bench);
criterion_main!(benches);
