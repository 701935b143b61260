use puzzle_search::engine::Board;
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::solver::AStarSearch;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;

#[derive(Default)]
struct Totals {
    generated: usize,
    expanded: usize,
    moves: usize,
    elapsed: Duration,
}

fn main() {
    let mut all_totals: HashMap<HeuristicKind, Totals> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let initial_board = Board::new_random_with_seed(current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        for kind in HeuristicKind::ALL {
            let mut search = AStarSearch::new(initial_board, kind.build());
            let start = Instant::now();
            let outcome = search.run();
            let elapsed = start.elapsed();

            let Some(path) = outcome.path() else {
                // Generated boards are always solvable.
                eprintln!(
                    "Warning: {} found no solution on board {} (Seed: {}):\n{}",
                    kind.label(),
                    board_idx,
                    current_seed,
                    initial_board
                );
                continue;
            };

            println!(
                "  Heuristic: {:<3}, Moves: {:<3}, Generated: {:<7}, Expanded: {:<7}, Time: {:?}",
                kind.label(),
                path.len(),
                search.generated_count(),
                search.expanded_count(),
                elapsed
            );

            let totals = all_totals.entry(kind).or_default();
            totals.generated += search.generated_count();
            totals.expanded += search.expanded_count();
            totals.moves += path.len();
            totals.elapsed += elapsed;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "Number of boards evaluated: {}",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );
    println!("\n--- Averages ---");

    let boards = NUM_RANDOM_BOARDS_FOR_EVALUATION as f64;
    for kind in HeuristicKind::ALL {
        let Some(totals) = all_totals.get(&kind) else {
            println!("Heuristic {}: No results recorded.", kind.label());
            continue;
        };
        println!(
            "{} ({}): Moves = {:.2}, Generated = {:.1}, Expanded = {:.1}, Time = {:?}",
            kind.label(),
            kind,
            totals.moves as f64 / boards,
            totals.generated as f64 / boards,
            totals.expanded as f64 / boards,
            totals.elapsed / NUM_RANDOM_BOARDS_FOR_EVALUATION as u32
        );
    }
}
