use crate::engine::{Board, BOARD_SIZE, TILE_COUNT};
use crate::error::PuzzleError;

/// Parses three row strings into a validated, solvable `Board`.
///
/// Each row holds three cells separated by whitespace (or commas), e.g. `"1 0 2"`.
/// The result is checked with [`validate_board`], so a returned board is always a
/// permutation of `0..=8` whose goal is reachable.
///
/// # Arguments
/// * `rows`: The rows of the board, top row first.
///
/// # Returns
/// * `Ok(Board)` if the rows describe a well-formed, solvable puzzle.
/// * `Err(PuzzleError)` if the row or cell counts are wrong, a cell is not a number,
///   a value is outside `0..=8` or repeated, or the puzzle is unsolvable.
///
/// # Examples
/// ```
/// use puzzle_search::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 0 2", "3 4 5", "6 7 8"]).unwrap();
/// assert_eq!(board.get_tile(0, 0), 1);
/// assert_eq!(board.blank_position(), (0, 1));
///
/// assert!(board_from_str_array(&["1 0 2", "3 4 5"]).is_err());
/// assert!(board_from_str_array(&["0 2 1", "3 4 5", "6 7 8"]).is_err()); // unsolvable
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, PuzzleError> {
    if rows.len() != BOARD_SIZE {
        return Err(PuzzleError::RowCount { found: rows.len() });
    }

    let mut values = Vec::with_capacity(TILE_COUNT);
    for (r, row) in rows.iter().enumerate() {
        let cells = parse_cells(row)?;
        if cells.len() != BOARD_SIZE {
            return Err(PuzzleError::RowLength {
                row: r,
                found: cells.len(),
            });
        }
        values.extend(cells);
    }

    validate_board(&values)
}

/// Parses a whole board from one string.
///
/// Accepts either nine cells separated by whitespace, commas or newlines
/// (`"1 0 2 3 4 5 6 7 8"`) or the nine-digit canonical key (`"102345678"`).
///
/// # Examples
/// ```
/// use puzzle_search::utils::parse_board;
///
/// let a = parse_board("1 0 2\n3 4 5\n6 7 8").unwrap();
/// let b = parse_board("102345678").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_board(input: &str) -> Result<Board, PuzzleError> {
    let trimmed = input.trim();
    let is_key = trimmed.len() == TILE_COUNT && trimmed.bytes().all(|b| b.is_ascii_digit());

    let values = if is_key {
        trimmed.bytes().map(|b| u32::from(b - b'0')).collect()
    } else {
        parse_cells(trimmed)?
    };

    validate_board(&values)
}

fn parse_cells(row: &str) -> Result<Vec<u32>, PuzzleError> {
    row.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().map_err(|_| PuzzleError::InvalidCell {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Checks that `values` is a solvable permutation of `0..=8` and builds its board.
///
/// This is the validator that must run before a board is handed to
/// [`crate::solver::AStarSearch`], which does not re-check its input.
pub fn validate_board(values: &[u32]) -> Result<Board, PuzzleError> {
    let board = validate_tiles(values)?;
    if !board.is_solvable() {
        return Err(PuzzleError::Unsolvable);
    }
    Ok(board)
}

/// Checks cardinality, range and uniqueness only, without the solvability test.
pub fn validate_tiles(values: &[u32]) -> Result<Board, PuzzleError> {
    if values.len() != TILE_COUNT {
        return Err(PuzzleError::CellCount {
            found: values.len(),
        });
    }

    let mut seen = [false; TILE_COUNT];
    let mut tiles = [0u8; TILE_COUNT];
    for (i, &value) in values.iter().enumerate() {
        if value as usize >= TILE_COUNT {
            return Err(PuzzleError::OutOfRange { value });
        }
        let tile = value as u8;
        if seen[tile as usize] {
            return Err(PuzzleError::DuplicateTile { value: tile });
        }
        seen[tile as usize] = true;
        tiles[i] = tile;
    }

    Ok(Board::from_flat(tiles))
}
