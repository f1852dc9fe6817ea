//! Benchmarks for the backtracking solver.
//!
//! Measures solving a well-known 30-given puzzle and completing an empty
//! grid (the worst case for the naive row-major search order).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridpunch_core::DigitGrid;
use gridpunch_solver::BacktrackingSolver;

const PUZZLE: &str = "
    53. .7. ...
    6.. 195 ...
    .98 ... .6.
    8.. .6. ..3
    4.. 8.3 ..1
    7.. .2. ..6
    .6. ... 28.
    ... 419 ..5
    ... .8. .79
";

fn bench_solve_puzzle(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();
    let grid: DigitGrid = PUZZLE.parse().unwrap();

    c.bench_function("solve_known_puzzle", |b| {
        b.iter_batched(
            || hint::black_box(grid.clone()),
            |mut grid| solver.solve(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_empty(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();

    c.bench_function("solve_empty_grid", |b| {
        b.iter_batched(
            || hint::black_box(DigitGrid::new()),
            |mut grid| solver.solve(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve_puzzle, bench_solve_empty);
criterion_main!(benches);
