//! Criterion benchmarks for the branch-and-bound assignment solver.
//!
//! Uses seeded random matrices so runs are comparable, plus a
//! diagonal-dominant instance where pruning closes almost the whole tree.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_assign::{CostMatrix, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(seed: u64, n: usize) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    CostMatrix::new(
        (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0.0..100.0)).collect())
            .collect(),
    )
}

fn diagonal_matrix(n: usize) -> CostMatrix {
    CostMatrix::new(
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 50.0 }).collect())
            .collect(),
    )
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random");
    for n in [6, 8, 10] {
        let matrix = random_matrix(42, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| Solver::solve(black_box(m)).unwrap());
        });
    }
    group.finish();
}

fn bench_diagonal(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_diagonal");
    for n in [10, 14] {
        let matrix = diagonal_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| Solver::solve(black_box(m)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_diagonal);
criterion_main!(benches);
