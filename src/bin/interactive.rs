use puzzle_search::engine::Board;
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::solver::{AStarSearch, SearchOutcome};
use puzzle_search::utils::board_from_str_array;
use std::io::{self, BufRead, Write};
use std::time::Instant;

fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Reads three rows from the user; `None` once input is exhausted.
fn read_board() -> io::Result<Option<Board>> {
    loop {
        println!("Enter the puzzle one row at a time, e.g. '1 0 2' (0 is the blank):");
        let mut rows = Vec::with_capacity(3);
        for i in 1..=3 {
            match prompt(&format!("Row {}: ", i))? {
                Some(row) => rows.push(row),
                None => return Ok(None),
            }
        }

        let rows: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        match board_from_str_array(&rows) {
            Ok(board) => return Ok(Some(board)),
            Err(e) => println!("Invalid puzzle: {}. Please try again.\n", e),
        }
    }
}

fn solve_and_print(board: &Board) {
    println!("\nInitial board:\n{}", board);

    for kind in HeuristicKind::ALL {
        let mut search = AStarSearch::new(*board, kind.build());
        let start = Instant::now();
        let outcome = search.run();
        let elapsed = start.elapsed();

        println!("\n-------------");
        println!(" {} Solution", kind.label());
        println!("-------------");
        match outcome {
            SearchOutcome::Solved(path) => {
                for (i, step) in path.boards().iter().enumerate() {
                    if i > 0 {
                        println!("Move {}: {}", i, path.slides()[i - 1]);
                    }
                    println!("{}\n", step);
                }
                println!("Moves: {}", path.len());
            }
            SearchOutcome::NoSolution => println!("No solution found."),
        }
        println!("Time Elapsed: {:?}", elapsed);
        println!("Nodes Generated: {}", search.generated_count());
    }
}

fn main() -> io::Result<()> {
    println!("Welcome to the 8-puzzle solver!");

    loop {
        println!("---------------------");
        println!("[1] Enter a puzzle");
        println!("[2] Generate a random puzzle");
        println!("[3] Quit");

        let Some(choice) = prompt("Choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => match read_board()? {
                Some(board) => solve_and_print(&board),
                None => break,
            },
            "2" => {
                let board = Board::new_random(&mut rand::thread_rng());
                solve_and_print(&board);
            }
            "3" | "q" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Enter 1, 2 or 3."),
        }
    }

    Ok(())
}
