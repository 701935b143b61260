use crate::engine::{Board, BLANK, BOARD_SIZE, TILE_COUNT};
use serde::Serialize;
use std::fmt;

/// Goal `(row, column)` of every tile value, indexed by the value.
///
/// Built once from the goal board and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalPositions([(usize, usize); TILE_COUNT]);

impl GoalPositions {
    /// Builds the table for the canonical goal `{0,1,2 / 3,4,5 / 6,7,8}`.
    pub fn new() -> Self {
        GoalPositions::from_goal(&Board::goal())
    }

    /// Builds the table by locating each value on `goal`.
    pub fn from_goal(goal: &Board) -> Self {
        let mut positions = [(0, 0); TILE_COUNT];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                positions[goal.get_tile(r, c) as usize] = (r, c);
            }
        }
        GoalPositions(positions)
    }

    /// Returns the goal `(row, column)` of `value`.
    ///
    /// # Panics
    /// Panics if `value` is not a tile value (`0..=8`).
    pub fn of(&self, value: u8) -> (usize, usize) {
        self.0[value as usize]
    }
}

impl Default for GoalPositions {
    fn default() -> Self {
        GoalPositions::new()
    }
}

/// The heuristic an A* search evaluates `h(n)` with.
///
/// Both policies are admissible and consistent for unit-cost slides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// h1: the number of misplaced non-blank tiles.
    Misplaced,
    /// h2: the sum of the Manhattan distances of non-blank tiles from their goal cells.
    Manhattan(GoalPositions),
}

impl Heuristic {
    /// Returns the Manhattan-distance heuristic with its goal table prepared.
    pub fn manhattan() -> Self {
        Heuristic::Manhattan(GoalPositions::new())
    }

    /// Returns the tag naming this heuristic.
    pub fn kind(&self) -> HeuristicKind {
        match self {
            Heuristic::Misplaced => HeuristicKind::Misplaced,
            Heuristic::Manhattan(_) => HeuristicKind::Manhattan,
        }
    }

    /// Estimates the number of slides remaining from `board` to the goal.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::engine::Board;
    /// use puzzle_search::heuristics::Heuristic;
    ///
    /// let board = Board::from_grid([[1, 2, 0], [3, 4, 5], [6, 7, 8]]);
    /// assert_eq!(Heuristic::Misplaced.evaluate(&board), 2);
    /// assert_eq!(Heuristic::manhattan().evaluate(&board), 2);
    /// ```
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Misplaced => misplaced_tiles(board),
            Heuristic::Manhattan(goal) => manhattan_distance(board, goal),
        }
    }
}

/// A data-free name for a heuristic, used for command-line selection and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Misplaced,
    Manhattan,
}

impl HeuristicKind {
    /// Both heuristics, in the order front ends run them.
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Misplaced, HeuristicKind::Manhattan];

    /// Builds the heuristic this tag names.
    pub fn build(&self) -> Heuristic {
        match self {
            HeuristicKind::Misplaced => Heuristic::Misplaced,
            HeuristicKind::Manhattan => Heuristic::manhattan(),
        }
    }

    /// Returns the short label used in printed output (`H1`/`H2`).
    pub fn label(&self) -> &'static str {
        match self {
            HeuristicKind::Misplaced => "H1",
            HeuristicKind::Manhattan => "H2",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            HeuristicKind::Misplaced => "misplaced tiles",
            HeuristicKind::Manhattan => "Manhattan distance",
        };
        write!(f, "{}", s)
    }
}

/// Counts non-blank tiles that are not on their goal cell.
///
/// The goal value of cell `(i, j)` is `3 * i + j`; the blank is never counted.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut count = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value != BLANK && value as usize != r * BOARD_SIZE + c {
                count += 1;
            }
        }
    }
    count
}

/// Sums, over non-blank tiles, the row and column distance to the tile's goal cell.
pub fn manhattan_distance(board: &Board, goal: &GoalPositions) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get_tile(r, c);
            if value != BLANK {
                let (goal_r, goal_c) = goal.of(value);
                distance += r.abs_diff(goal_r) + c.abs_diff(goal_c);
            }
        }
    }
    distance as u32
}
