use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use puzzle_search::engine::Board;
use puzzle_search::genetic::{random_population, Genetic};
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::hill_climbing::hill_climb;
use puzzle_search::queens::QueenBoard;
use puzzle_search::solver::{AStarSearch, DuplicatePolicy};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// A*: both heuristics on a 20-move board, under each duplicate policy
// ---------------------------------------------------------------------------

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");
    group.sample_size(20);

    let board = Board::from_grid([[4, 5, 8], [3, 0, 7], [2, 6, 1]]);
    let policies = [
        ("explored_only", DuplicatePolicy::ExploredOnly),
        ("suppress_frontier", DuplicatePolicy::SuppressFrontier),
    ];

    for kind in HeuristicKind::ALL {
        for (policy_name, policy) in policies {
            group.bench_with_input(
                BenchmarkId::new(format!("{}/{policy_name}", kind.label()), ""),
                &board,
                |b, board| {
                    b.iter(|| AStarSearch::new(*board, kind.build()).with_policy(policy).run());
                },
            );
        }
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// N-Queens local search
// ---------------------------------------------------------------------------

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("queens");

    let boards: Vec<QueenBoard> = (0..16).map(|seed| QueenBoard::new_random_with_seed(8, seed)).collect();
    group.bench_function("hill_climb/8", |b| {
        b.iter(|| boards.iter().map(|board| hill_climb(board).cost).sum::<u64>());
    });

    group.sample_size(10);
    group.bench_function("genetic/8", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(17);
            let population = random_population(8, 20, &mut rng);
            Genetic::new(population, 17).map(Genetic::solve)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_astar, bench_queens);
criterion_main!(benches);
