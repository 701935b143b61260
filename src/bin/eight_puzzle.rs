use clap::{Parser, ValueEnum};
use puzzle_search::engine::Board;
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::solver::{AStarSearch, DuplicatePolicy, SearchOutcome, SearchReport};
use puzzle_search::utils::{board_from_str_array, parse_board};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicChoice {
    /// h1: number of misplaced tiles
    Misplaced,
    /// h2: sum of Manhattan distances
    Manhattan,
    /// Run h1, then h2
    Both,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board as nine values, e.g. "1 0 2 3 4 5 6 7 8" or "102345678"
    #[clap(short, long, conflicts_with_all = ["file", "seed"])]
    board: Option<String>,

    /// Path to a board file (three rows of three values)
    #[clap(short, long, conflicts_with = "seed")]
    file: Option<PathBuf>,

    /// Seed for a random solvable board; a random seed is used if no board is given
    #[clap(short, long)]
    seed: Option<u64>,

    /// Heuristic(s) to solve with
    #[clap(long, value_enum, default_value_t = HeuristicChoice::Both)]
    heuristic: HeuristicChoice,

    /// Also drop children whose board is already waiting in the frontier
    #[clap(long)]
    tighten: bool,

    /// Print machine-readable reports instead of the step-by-step solution
    #[clap(long)]
    json: bool,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board: {}", e))
}

fn load_board(args: &Args) -> Result<Board, String> {
    if let Some(text) = &args.board {
        return parse_board(text).map_err(|e| format!("Invalid board: {}", e));
    }
    if let Some(path) = &args.file {
        return read_board_file(path);
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Generating a puzzle with seed {}", seed);
    Ok(Board::new_random_with_seed(seed))
}

fn print_solution(kind: HeuristicKind, outcome: &SearchOutcome) {
    println!("\n-------------");
    println!(" {} Solution", kind.label());
    println!("-------------");
    match outcome {
        SearchOutcome::Solved(path) => {
            for (i, board) in path.boards().iter().enumerate() {
                if i > 0 {
                    println!("Move {}: {}", i, path.slides()[i - 1]);
                }
                println!("{}\n", board);
            }
            println!("Moves: {}", path.len());
        }
        SearchOutcome::NoSolution => println!("No solution found."),
    }
}

fn main() {
    let args = Args::parse();

    let board = load_board(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let kinds: Vec<HeuristicKind> = match args.heuristic {
        HeuristicChoice::Misplaced => vec![HeuristicKind::Misplaced],
        HeuristicChoice::Manhattan => vec![HeuristicKind::Manhattan],
        HeuristicChoice::Both => HeuristicKind::ALL.to_vec(),
    };
    let policy = if args.tighten {
        DuplicatePolicy::SuppressFrontier
    } else {
        DuplicatePolicy::ExploredOnly
    };

    if !args.json {
        println!("Initial board:\n{}", board);
    }

    let mut reports: Vec<SearchReport> = Vec::new();
    for kind in kinds {
        let mut search = AStarSearch::new(board, kind.build()).with_policy(policy);

        let start = Instant::now();
        let outcome = search.run();
        let elapsed = start.elapsed();

        if args.json {
            reports.push(search.report(&outcome));
        } else {
            print_solution(kind, &outcome);
            println!("Time Elapsed: {:?}", elapsed);
            println!("Nodes Generated: {}", search.generated_count());
            println!("Nodes Expanded: {}", search.expanded_count());
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                process::exit(1);
            }
        }
    }
}
