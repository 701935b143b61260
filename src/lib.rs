//! # Puzzle Search Library
//!
//! This library solves the 8-puzzle with A* graph search and the N-Queens problem
//! with two local-search algorithms.
//!
//! It is used by four binaries:
//! - `eight_puzzle`: Solves one 8-puzzle (given or randomly generated) with either
//!   or both heuristics and prints the path, time taken and nodes generated.
//! - `nqueens`: Runs hill climbing (single runs or batches of trials) or the genetic
//!   algorithm on random N-Queens boards.
//! - `interactive`: A menu-driven front end for entering or generating 8-puzzles.
//! - `heuristic_evaluator`: Compares the two A* heuristics over many seeded boards.
//!
//! ## Modules
//! - `engine`: The 3x3 sliding-tile `Board`, blank moves (`Slide`) and the canonical
//!   `BoardKey` encoding.
//! - `heuristics`: The misplaced-tiles and Manhattan-distance heuristics.
//! - `solver`: The A* search engine (`AStarSearch`), its frontier and path reconstruction.
//! - `utils`: Parsing and validation (well-formedness and solvability) of input boards.
//! - `queens`: The N-Queens board and the outcome type shared by its solvers.
//! - `hill_climbing`: Steepest-ascent hill climbing for N-Queens.
//! - `genetic`: The genetic algorithm for N-Queens.
//! - `error`: The crate's error type.

pub mod engine;
pub mod error;
pub mod genetic;
pub mod heuristics;
pub mod hill_climbing;
pub mod queens;
pub mod solver;
pub mod utils;
