//! Benchmarks for the snake cube solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustc_hash::FxHashSet;

use snakecube::geometry::{is_connected, positions_visited, shift_into_positive_space};
use snakecube::grid::{format_solution, goal_cells};
use snakecube::puzzles::{PUZZLE_A, PUZZLE_LARGE};
use snakecube::{depth_first_search, SearchSpace, Trajectory};

/// Benchmark solving the common 27-cube snake end to end.
fn bench_solve(c: &mut Criterion) {
    let puzzle = PUZZLE_A.build().unwrap();
    c.bench_function("solve_puzzle_a", |b| {
        b.iter(|| depth_first_search(black_box(&puzzle), None))
    });
}

/// Benchmark solving the 4x4x4 snake.
fn bench_solve_large(c: &mut Criterion) {
    let puzzle = PUZZLE_LARGE.build().unwrap();
    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("solve", |b| {
        b.iter(|| depth_first_search(black_box(&puzzle), None))
    });
    group.finish();
}

/// Benchmark one successor expansion at a pivot, including validity checks.
fn bench_successors(c: &mut Criterion) {
    let puzzle = PUZZLE_LARGE.build().unwrap();
    let state: Trajectory = "ENWWWNENWUSSESDWUUUNNEEENWWW".parse().unwrap();

    c.bench_function("successors_at_pivot", |b| {
        b.iter(|| puzzle.successors(black_box(&state)))
    });
}

/// Benchmark the connectivity check on the empty half of a 4x4x4 cube.
fn bench_is_connected(c: &mut Criterion) {
    let cells: FxHashSet<_> = goal_cells(4)
        .into_iter()
        .filter(|&(x, _, _)| x >= 2)
        .collect();

    c.bench_function("is_connected", |b| {
        b.iter(|| is_connected(black_box(&cells)))
    });
}

/// Benchmark replaying and shifting a full 4x4x4 fold.
fn bench_positions(c: &mut Criterion) {
    let solution = depth_first_search(&PUZZLE_LARGE.build().unwrap(), None)
        .solution()
        .unwrap();
    let directions = solution.directions();

    c.bench_function("shifted_positions", |b| {
        b.iter(|| {
            shift_into_positive_space(positions_visited(black_box(&directions).iter().copied()))
        })
    });
}

/// Benchmark formatting a solution for display.
fn bench_format_solution(c: &mut Criterion) {
    let solution = depth_first_search(&PUZZLE_A.build().unwrap(), None)
        .solution()
        .unwrap();

    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(3, black_box(&solution)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_large,
    bench_successors,
    bench_is_connected,
    bench_positions,
    bench_format_solution
);
criterion_main!(benches);
