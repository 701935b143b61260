//! Error type shared by the parsing, validation and N-Queens setup code.
//!
//! The search engine itself never fails: an exhausted frontier is reported as
//! [`crate::solver::SearchOutcome::NoSolution`], not as an error.

use thiserror::Error;

/// Everything that can go wrong before a solver is started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The input did not contain exactly three rows.
    #[error("expected 3 rows, found {found}")]
    RowCount { found: usize },

    /// A row did not contain exactly three cells.
    #[error("row {row} has {found} cells (expected 3)")]
    RowLength { row: usize, found: usize },

    /// The input did not contain exactly nine cells.
    #[error("expected 9 cells, found {found}")]
    CellCount { found: usize },

    /// A cell could not be parsed as a number.
    #[error("unrecognized cell '{token}'")]
    InvalidCell { token: String },

    /// A tile value outside `0..=8`.
    #[error("tile value {value} is out of range (expected 0-8)")]
    OutOfRange { value: u32 },

    /// A tile value that appears more than once.
    #[error("tile value {value} appears more than once")]
    DuplicateTile { value: u8 },

    /// A well-formed board whose permutation parity makes the goal unreachable.
    #[error("the puzzle is not solvable")]
    Unsolvable,

    /// A canonical key that is not nine distinct digits `0`-`8`.
    #[error("malformed board key '{key}'")]
    MalformedKey { key: String },

    /// An N-Queens board size the solvers do not accept.
    #[error("invalid number of queens {size} (expected at least {min})")]
    QueenCount { size: usize, min: usize },

    /// A queen placed on a row outside the board.
    #[error("queen in column {col} is on row {row}, outside a board of size {size}")]
    QueenRow { col: usize, row: usize, size: usize },

    /// Boards of different sizes mixed in one population.
    #[error("population mixes board sizes {expected} and {found}")]
    MixedBoardSizes { expected: usize, found: usize },

    /// A genetic population too small to select parents and survivors from.
    #[error("population size {size} is too small (expected at least {min})")]
    PopulationTooSmall { size: usize, min: usize },
}
