//! N-Queens board shared by the local-search solvers.
//!
//! A board places exactly one queen per column; `rows[col]` is that queen's row.
//! Neither solver shares any state with the sliding-puzzle search.
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

/// Smallest board the front ends accept (there is no solution for 2 or 3 queens).
pub const MIN_QUEENS: usize = 4;

/// One queen per column, stored as the row of each column's queen.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QueenBoard {
    rows: Vec<usize>,
}

impl QueenBoard {
    /// Creates a board from explicit queen rows.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::queens::QueenBoard;
    /// let board = QueenBoard::new(vec![1, 3, 0, 2]).unwrap();
    /// assert!(board.is_solution());
    /// assert!(QueenBoard::new(vec![0, 4, 1, 2]).is_err());
    /// ```
    pub fn new(rows: Vec<usize>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::QueenCount { size, min: 1 });
        }
        if let Some((col, &row)) = rows.iter().enumerate().find(|&(_, &row)| row >= size) {
            return Err(PuzzleError::QueenRow { col, row, size });
        }
        Ok(QueenBoard { rows })
    }

    /// Places each queen on a uniformly random row of its column.
    pub fn new_random(size: usize, rng: &mut impl Rng) -> Self {
        let rows = (0..size).map(|_| rng.gen_range(0..size)).collect();
        QueenBoard { rows }
    }

    /// Like [`QueenBoard::new_random`], with a seeded generator.
    pub fn new_random_with_seed(size: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        QueenBoard::new_random(size, &mut rng)
    }

    /// Number of queens (and rows, and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns a copy with the queen of `col` moved to `row`.
    pub fn with_queen_at(&self, col: usize, row: usize) -> Self {
        let mut rows = self.rows.clone();
        rows[col] = row;
        QueenBoard { rows }
    }

    /// Counts pairs of queens sharing a row or a diagonal.
    pub fn attacking_pairs(&self) -> u32 {
        let n = self.rows.len();
        let mut pairs = 0;
        for i in 0..n {
            for j in i + 1..n {
                if attacks(self.rows[i], self.rows[j], j - i) {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    /// Counts pairs of queens that do not attack each other (the genetic fitness).
    pub fn non_attacking_pairs(&self) -> u32 {
        max_non_attacking_pairs(self.size()) - self.attacking_pairs()
    }

    /// `true` when no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.attacking_pairs() == 0
    }
}

fn attacks(row_a: usize, row_b: usize, distance: usize) -> bool {
    row_a == row_b || row_a.abs_diff(row_b) == distance
}

/// Number of queen pairs on a board of `size`, i.e. the best possible fitness.
pub fn max_non_attacking_pairs(size: usize) -> u32 {
    (size * size.saturating_sub(1) / 2) as u32
}

/// Rejects board sizes below [`MIN_QUEENS`].
pub fn validate_queen_count(size: usize) -> Result<(), PuzzleError> {
    if size < MIN_QUEENS {
        return Err(PuzzleError::QueenCount {
            size,
            min: MIN_QUEENS,
        });
    }
    Ok(())
}

impl fmt::Display for QueenBoard {
    /// Renders one line per row, `Q` for a queen and `-` for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rows.len();
        for r in 0..n {
            let line: Vec<&str> = self
                .rows
                .iter()
                .map(|&row| if row == r { "Q" } else { "-" })
                .collect();
            write!(f, "{}", line.join(" "))?;
            if r < n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// What a local-search solver reports: whether it solved the board, the board it
/// ended on, and its cost (successors generated, or generations bred).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueensOutcome {
    pub solved: bool,
    pub board: QueenBoard,
    pub cost: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacking_pairs_same_row() {
        let board = QueenBoard::new(vec![0, 0, 0, 0]).unwrap();
        assert_eq!(board.attacking_pairs(), 6);
        assert_eq!(board.non_attacking_pairs(), 0);
    }

    #[test]
    fn test_attacking_pairs_diagonals() {
        let board = QueenBoard::new(vec![0, 1, 2, 3]).unwrap();
        assert_eq!(board.attacking_pairs(), 6);
        let board = QueenBoard::new(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(board.attacking_pairs(), 1);
    }

    #[test]
    fn test_known_solutions() {
        assert!(QueenBoard::new(vec![1, 3, 0, 2]).unwrap().is_solution());
        let eight = QueenBoard::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
        assert!(eight.is_solution());
        assert_eq!(eight.non_attacking_pairs(), 28);
    }

    #[test]
    fn test_max_non_attacking_pairs() {
        assert_eq!(max_non_attacking_pairs(1), 0);
        assert_eq!(max_non_attacking_pairs(4), 6);
        assert_eq!(max_non_attacking_pairs(8), 28);
    }

    #[test]
    fn test_new_rejects_bad_rows() {
        assert_eq!(
            QueenBoard::new(vec![0, 1, 5, 2]),
            Err(PuzzleError::QueenRow {
                col: 2,
                row: 5,
                size: 4
            })
        );
        assert!(QueenBoard::new(Vec::new()).is_err());
    }

    #[test]
    fn test_validate_queen_count() {
        assert!(validate_queen_count(3).is_err());
        assert!(validate_queen_count(4).is_ok());
    }

    #[test]
    fn test_random_board_in_range_and_seeded() {
        let a = QueenBoard::new_random_with_seed(8, 5);
        assert_eq!(a, QueenBoard::new_random_with_seed(8, 5));
        assert_eq!(a.size(), 8);
        assert!(a.rows().iter().all(|&r| r < 8));
    }

    #[test]
    fn test_with_queen_at() {
        let board = QueenBoard::new(vec![0, 0, 0, 0]).unwrap();
        let moved = board.with_queen_at(1, 3);
        assert_eq!(moved.rows(), &[0, 3, 0, 0]);
        assert_eq!(board.rows(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_display() {
        let board = QueenBoard::new(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(board.to_string(), "- - Q -\nQ - - -\n- - - Q\n- Q - -");
    }
}
