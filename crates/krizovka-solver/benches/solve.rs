//! Benchmarks for the fill sweep.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solve
//! ```

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use krizovka_core::{Direction, Puzzle};
use krizovka_solver::{CachedProvider, Solver, testing::StubProvider};

/// A ladder of horizontal words joined by vertical two-letter links.
fn ladder_puzzle() -> Puzzle {
    let mut puzzle = Puzzle::new(6, 6);
    for row in 0..6 {
        let hint = format!("row{row}");
        puzzle
            .carve(row, 0, Direction::Horizontal, 6, Some(&hint))
            .unwrap();
    }
    for col in 0..6 {
        let hint = format!("col{col}");
        puzzle
            .carve(0, col, Direction::Vertical, 6, Some(&hint))
            .unwrap();
    }
    puzzle
}

fn ladder_provider() -> StubProvider {
    let mut provider = StubProvider::new();
    for i in 0..6 {
        // Every row and column accepts the same bland six-letter fill, so
        // the sweep exercises scoring and cascading on every clue.
        provider = provider
            .with(&format!("row{i}"), &["SSSSSS", "SSSSST"])
            .with(&format!("col{i}"), &["SSSSSS"]);
    }
    provider
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new(CachedProvider::new(ladder_provider()));
    let puzzle = ladder_puzzle();

    c.bench_function("solve_6x6_ladder", |b| {
        b.iter_batched(
            || puzzle.clone(),
            |mut puzzle| solver.solve(&mut puzzle),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
