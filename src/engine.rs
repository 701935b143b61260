//! Sliding-tile board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: a 3x3 arrangement of the tiles `0..=8`, where `0` is the blank.
//! - `Slide`: the four directions the blank can move in.
//! - `BoardKey`: the canonical nine-digit encoding used for explored-set membership.
//!
//! Boards are plain `Copy` values, so every transition produces a private copy and no
//! two search nodes ever alias the same grid.
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The value that marks the blank cell.
pub const BLANK: u8 = 0;

/// Canonical key of the goal board `{0,1,2 / 3,4,5 / 6,7,8}`.
pub const GOAL_KEY: BoardKey = BoardKey(*b"012345678");

/// A direction the blank moves in when sliding a neighbouring tile into it.
///
/// The declaration order is the order in which the search engine expands children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Slide {
    /// The blank swaps with the tile below it.
    Down,
    /// The blank swaps with the tile above it.
    Up,
    /// The blank swaps with the tile to its right.
    Right,
    /// The blank swaps with the tile to its left.
    Left,
}

impl Slide {
    /// All slides in expansion order.
    pub const ALL: [Slide; 4] = [Slide::Down, Slide::Up, Slide::Right, Slide::Left];

    /// Returns the `(row, column)` offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Slide::Down => (1, 0),
            Slide::Up => (-1, 0),
            Slide::Right => (0, 1),
            Slide::Left => (0, -1),
        }
    }

    /// Returns the slide that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Slide::Down => Slide::Up,
            Slide::Up => Slide::Down,
            Slide::Right => Slide::Left,
            Slide::Left => Slide::Right,
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Slide::Down => "Down",
            Slide::Up => "Up",
            Slide::Right => "Right",
            Slide::Left => "Left",
        };
        write!(f, "{}", s)
    }
}

/// The canonical encoding of a board: its nine cells as ASCII digits, row-major.
///
/// Every key holds each digit `0`-`8` exactly once, so distinct boards always map to
/// distinct keys and [`Board::from_key`] recovers the board exactly.
///
/// # Examples
/// ```
/// use puzzle_search::engine::{Board, BoardKey, GOAL_KEY};
///
/// assert_eq!(Board::goal().key(), GOAL_KEY);
/// assert_eq!(GOAL_KEY.to_string(), "012345678");
///
/// let key: BoardKey = "102345678".parse().unwrap();
/// assert_eq!(Board::from_key(&key).get_tile(0, 0), 1);
/// assert!("112345678".parse::<BoardKey>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey([u8; TILE_COUNT]);

impl BoardKey {
    /// Returns the key's digits as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8; TILE_COUNT] {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{}", digit as char)?;
        }
        Ok(())
    }
}

impl FromStr for BoardKey {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PuzzleError::MalformedKey { key: s.to_string() };
        let bytes = s.as_bytes();
        if bytes.len() != TILE_COUNT {
            return Err(malformed());
        }

        let mut seen = [false; TILE_COUNT];
        let mut digits = [0u8; TILE_COUNT];
        for (i, &b) in bytes.iter().enumerate() {
            if !(b'0'..=b'8').contains(&b) || seen[(b - b'0') as usize] {
                return Err(malformed());
            }
            seen[(b - b'0') as usize] = true;
            digits[i] = b;
        }
        Ok(BoardKey(digits))
    }
}

/// A 3x3 sliding-tile board.
///
/// The board is not validated on construction; callers are expected to pass a
/// permutation of `0..=8` (see [`crate::utils::validate_board`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns the goal board, where the cell `(i, j)` holds `3 * i + j`.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::engine::Board;
    /// let goal = Board::goal();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.get_tile(2, 1), 7);
    /// ```
    pub fn goal() -> Self {
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (r * BOARD_SIZE + c) as u8;
            }
        }
        Board { grid }
    }

    /// Creates a board from a predefined grid.
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid }
    }

    /// Creates a board from its nine cells in row-major order.
    pub fn from_flat(tiles: [u8; TILE_COUNT]) -> Self {
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (i, &tile) in tiles.iter().enumerate() {
            grid[i / BOARD_SIZE][i % BOARD_SIZE] = tile;
        }
        Board { grid }
    }

    /// Decodes a canonical key back into the board it was built from.
    pub fn from_key(key: &BoardKey) -> Self {
        let mut tiles = [BLANK; TILE_COUNT];
        for (tile, &digit) in tiles.iter_mut().zip(key.as_bytes()) {
            *tile = digit - b'0';
        }
        Board::from_flat(tiles)
    }

    /// Creates a random solvable board using a seeded generator.
    ///
    /// The same seed always produces the same board.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Board::new_random(&mut rng)
    }

    /// Creates a random solvable board, reshuffling until the permutation is solvable.
    pub fn new_random(rng: &mut impl Rng) -> Self {
        let mut tiles: [u8; TILE_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        loop {
            tiles.shuffle(rng);
            let board = Board::from_flat(tiles);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the underlying grid.
    pub fn get_grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the nine cells in row-major order.
    pub fn to_flat(&self) -> [u8; TILE_COUNT] {
        let mut tiles = [BLANK; TILE_COUNT];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = self.grid[i / BOARD_SIZE][i % BOARD_SIZE];
        }
        tiles
    }

    /// Returns the canonical key of this board.
    pub fn key(&self) -> BoardKey {
        let mut digits = [b'0'; TILE_COUNT];
        for (digit, tile) in digits.iter_mut().zip(self.to_flat()) {
            *digit = b'0' + tile;
        }
        BoardKey(digits)
    }

    /// Returns `true` if this is the goal board.
    pub fn is_goal(&self) -> bool {
        self.key() == GOAL_KEY
    }

    /// Returns the `(row, column)` of the blank.
    ///
    /// If the board holds no blank (an invalid board), `(0, 0)` is returned.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == BLANK {
                    return (r, c);
                }
            }
        }
        (0, 0)
    }

    /// Returns the board produced by moving the blank in `slide`'s direction, or
    /// `None` if that would move it off the grid.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::engine::{Board, Slide};
    /// let goal = Board::goal(); // blank in the top-left corner
    /// assert!(goal.slide(Slide::Up).is_none());
    /// let next = goal.slide(Slide::Right).unwrap();
    /// assert_eq!(next.get_tile(0, 0), 1);
    /// assert_eq!(next.get_tile(0, 1), 0);
    /// ```
    pub fn slide(&self, slide: Slide) -> Option<Board> {
        let (r, c) = self.blank_position();
        let (dr, dc) = slide.as_offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;

        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return None;
        }
        let (nr, nc) = (nr as usize, nc as usize);

        let mut next = *self;
        next.grid[r][c] = next.grid[nr][nc];
        next.grid[nr][nc] = BLANK;
        Some(next)
    }

    /// Returns every legal `(slide, board)` successor in expansion order.
    pub fn successors(&self) -> Vec<(Slide, Board)> {
        Slide::ALL
            .iter()
            .filter_map(|&slide| self.slide(slide).map(|board| (slide, board)))
            .collect()
    }

    /// Counts pairs of non-blank tiles that appear in the wrong relative order.
    pub fn inversions(&self) -> usize {
        let tiles = self.to_flat();
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != BLANK)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < val)
                    .count()
            })
            .sum()
    }

    /// Returns `true` if the goal is reachable from this board.
    ///
    /// On an odd-width board a slide never changes the parity of the inversion count,
    /// and the goal has zero inversions, so a board is solvable iff its count is even.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", cells.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
