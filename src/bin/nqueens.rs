use clap::{Parser, Subcommand};
use puzzle_search::genetic::{random_population, Genetic, GeneticConfig};
use puzzle_search::hill_climbing::{hill_climb, run_trials};
use puzzle_search::queens::{validate_queen_count, QueenBoard, QueensOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of queens (at least 4)
    #[clap(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Seed for board generation; a random seed is used if omitted
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Steepest-ascent hill climbing from a random board
    HillClimb {
        /// Run this many random boards and report aggregate results
        #[clap(short, long)]
        trials: Option<u32>,
    },
    /// Genetic algorithm over a random population
    Genetic {
        /// Population size (at least 4)
        #[clap(short = 'k', long, default_value_t = 20)]
        population: usize,

        /// Give up after this many generations
        #[clap(long, default_value_t = GeneticConfig::default().max_generations)]
        max_generations: u64,
    },
}

fn print_outcome(outcome: &QueensOutcome, cost_label: &str) {
    println!("\n----------");
    if outcome.solved {
        println!(" Solution");
    } else {
        println!(" No solution found (final board)");
    }
    println!("----------");
    println!("{}\n", outcome.board);
    println!("Attacking pairs: {}", outcome.board.attacking_pairs());
    println!("Cost ({}): {}", cost_label, outcome.cost);
}

fn main() {
    let args = Args::parse();

    if let Err(e) = validate_queen_count(args.size) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    match args.command {
        Command::HillClimb { trials: None } => {
            let board = QueenBoard::new_random(args.size, &mut rng);
            println!("Initial board:\n{}", board);

            let start = Instant::now();
            let outcome = hill_climb(&board);
            let elapsed = start.elapsed();

            print_outcome(&outcome, "boards generated");
            println!("Time: {:?}", elapsed);
        }
        Command::HillClimb {
            trials: Some(trials),
        } => {
            let start = Instant::now();
            let summary = run_trials(args.size, trials, &mut rng);
            let elapsed = start.elapsed();

            println!("\n---------");
            println!(" Results");
            println!("---------");
            println!("Instances: {}", summary.trials);
            println!("Percent solved: {:.1}%", summary.solved_percent());
            if trials > 0 {
                println!(
                    "Average time to solve a board: {:?}",
                    elapsed / trials
                );
            }
            println!(
                "Average cost to solve a board: {:.1} boards generated",
                summary.average_cost()
            );
        }
        Command::Genetic {
            population,
            max_generations,
        } => {
            let boards = random_population(args.size, population, &mut rng);
            let genetic = match Genetic::new(boards, seed) {
                Ok(g) => g.with_config(GeneticConfig { max_generations }),
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            };

            let start = Instant::now();
            let outcome = genetic.solve();
            let elapsed = start.elapsed();

            print_outcome(&outcome, "generation count");
            println!("Time: {:?}", elapsed);
        }
    }
}
