//! Benchmarks for the sliding tile puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle::board::Board;
use npuzzle::solver::{solve, Strategy};

/// A 3x3 board five moves from the goal.
fn scrambled_board() -> Board {
    Board::new(3, vec![1, 3, 6, 4, 2, 0, 7, 5, 8])
}

/// Benchmark a full breadth-first run.
fn bench_solve_breadth(c: &mut Criterion) {
    let board = scrambled_board();
    c.bench_function("solve_breadth", |b| {
        b.iter(|| solve(black_box(board.clone()), Strategy::Breadth))
    });
}

/// Benchmark a full greedy best-first run.
fn bench_solve_best(c: &mut Criterion) {
    let board = scrambled_board();
    c.bench_function("solve_best", |b| {
        b.iter(|| solve(black_box(board.clone()), Strategy::Best))
    });
}

/// Benchmark a full a-star run.
fn bench_solve_astar(c: &mut Criterion) {
    let board = scrambled_board();
    c.bench_function("solve_a_star", |b| {
        b.iter(|| solve(black_box(board.clone()), Strategy::AStar))
    });
}

/// Benchmark the Manhattan distance heuristic on a 4x4 board.
fn bench_manhattan_distance(c: &mut Criterion) {
    let goal = Board::goal(4);
    let board = Board::new(
        4,
        vec![5, 1, 2, 4, 9, 6, 3, 8, 13, 10, 7, 12, 14, 11, 15, 0],
    );

    c.bench_function("manhattan_distance", |b| {
        b.iter(|| black_box(&board).manhattan_distance(black_box(&goal)))
    });
}

criterion_group!(
    benches,
    bench_solve_breadth,
    bench_solve_best,
    bench_solve_astar,
    bench_manhattan_distance
);
criterion_main!(benches);
