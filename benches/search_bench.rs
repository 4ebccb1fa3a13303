use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Grid, PathSearch};
use grid_util::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use std::ops::ControlFlow;

fn random_grid(n: usize, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(n).unwrap();
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            if rng.gen_bool(density) {
                grid.set_barrier(row, col).unwrap();
            }
        }
    }
    grid.clear_barrier(0, 0).unwrap();
    grid.clear_barrier(n as i32 - 1, n as i32 - 1).unwrap();
    grid.compute_neighbors();
    grid
}

fn search_bench(c: &mut Criterion) {
    for (n, density) in [(50, 0.0), (50, 0.25), (100, 0.25)] {
        let mut grid = random_grid(n, density, 0);
        let start = Point::new(0, 0);
        let end = Point::new(n as i32 - 1, n as i32 - 1);
        let search = PathSearch::new();
        c.bench_function(format!("astar {n}x{n}, {density} barriers").as_str(), |b| {
            b.iter(|| {
                grid.clear_trace();
                black_box(
                    search
                        .run(&mut grid, start, end, |_| ControlFlow::Continue(()))
                        .unwrap(),
                )
            })
        });
    }
}

fn compute_neighbors_bench(c: &mut Criterion) {
    let mut grid = random_grid(100, 0.25, 1);
    c.bench_function("compute_neighbors 100x100", |b| {
        b.iter(|| black_box(&mut grid).compute_neighbors())
    });
}

criterion_group!(benches, search_bench, compute_neighbors_bench);
criterion_main!(benches);
