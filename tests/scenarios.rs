use puzzle_search::engine::{Board, BoardKey, Slide, GOAL_KEY};
use puzzle_search::error::PuzzleError;
use puzzle_search::heuristics::{Heuristic, HeuristicKind};
use puzzle_search::hill_climbing::hill_climb;
use puzzle_search::queens::QueenBoard;
use puzzle_search::solver::{AStarSearch, SearchOutcome};
use puzzle_search::utils::{board_from_str_array, parse_board};

fn solve(board: Board, kind: HeuristicKind) -> (SearchOutcome, usize, usize) {
    let mut search = AStarSearch::new(board, kind.build());
    let outcome = search.run();
    (outcome, search.generated_count(), search.expanded_count())
}

#[test]
fn solved_input_needs_no_moves() {
    let board = board_from_str_array(&["0 1 2", "3 4 5", "6 7 8"]).unwrap();
    for kind in HeuristicKind::ALL {
        let (outcome, generated, expanded) = solve(board, kind);
        let path = outcome.path().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.boards(), &[Board::goal()]);
        assert_eq!(generated, 1);
        assert_eq!(expanded, 0);
    }
}

#[test]
fn one_move_input() {
    let board = parse_board("1 0 2 3 4 5 6 7 8").unwrap();
    for kind in HeuristicKind::ALL {
        let (outcome, generated, expanded) = solve(board, kind);
        let path = outcome.path().unwrap();
        assert_eq!(path.slides(), &[Slide::Left]);
        assert_eq!(path.boards().last(), Some(&Board::goal()));
        // Root plus its three children.
        assert_eq!(generated, 4);
        assert_eq!(expanded, 1);
    }
}

#[test]
fn two_move_input_walks_through_each_board() {
    let board = parse_board("120345678").unwrap();
    let (outcome, generated, _) = solve(board, HeuristicKind::Manhattan);
    let path = outcome.path().unwrap();
    assert_eq!(path.slides(), &[Slide::Left, Slide::Left]);
    assert_eq!(
        path.boards(),
        &[
            board,
            Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]),
            Board::goal(),
        ]
    );
    assert_eq!(generated, 5);
}

#[test]
fn manhattan_generates_fewer_nodes_on_hard_board() {
    let board = board_from_str_array(&["4 5 8", "3 0 7", "2 6 1"]).unwrap();

    let (h1_outcome, h1_generated, h1_expanded) = solve(board, HeuristicKind::Misplaced);
    let (h2_outcome, h2_generated, h2_expanded) = solve(board, HeuristicKind::Manhattan);

    assert_eq!(h1_outcome.path().map(|p| p.len()), Some(20));
    assert_eq!(h2_outcome.path().map(|p| p.len()), Some(20));
    assert_eq!((h1_generated, h1_expanded), (6306, 3817));
    assert_eq!((h2_generated, h2_expanded), (438, 264));
    assert!(h2_generated <= h1_generated);
}

#[test]
fn deep_board_is_solved_optimally() {
    let board = Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
    let (outcome, generated, expanded) = solve(board, HeuristicKind::Manhattan);
    assert_eq!(outcome.path().map(|p| p.len()), Some(27));
    assert_eq!((generated, expanded), (6977, 4414));
}

#[test]
fn every_path_step_is_a_single_slide() {
    let board = Board::new_random_with_seed(42);
    let (outcome, _, _) = solve(board, HeuristicKind::Manhattan);
    let path = outcome.path().unwrap();
    assert_eq!(path.boards()[0], board);
    for (pair, slide) in path.boards().windows(2).zip(path.slides()) {
        assert_eq!(pair[0].slide(*slide), Some(pair[1]));
    }
}

#[test]
fn unsolvable_input_is_rejected_by_validation() {
    assert_eq!(
        board_from_str_array(&["0 2 1", "3 4 5", "6 7 8"]),
        Err(PuzzleError::Unsolvable)
    );
}

#[test]
fn unsolvable_board_exhausts_search() {
    let board = Board::from_grid([[0, 2, 1], [3, 4, 5], [6, 7, 8]]);
    let mut search = AStarSearch::new(board, Heuristic::manhattan());
    assert_eq!(search.run(), SearchOutcome::NoSolution);
    assert_eq!(search.explored_count(), 181_440);
    assert_eq!(search.frontier_len(), 0);
}

#[test]
fn malformed_input_is_reported() {
    assert_eq!(
        board_from_str_array(&["1 2", "3 4 5", "6 7 8"]),
        Err(PuzzleError::RowLength { row: 0, found: 2 })
    );
    assert_eq!(
        parse_board("1 1 2 3 4 5 6 7 8"),
        Err(PuzzleError::DuplicateTile { value: 1 })
    );
    assert_eq!(
        parse_board("0 1 2 3 4 5 6 7 9"),
        Err(PuzzleError::OutOfRange { value: 9 })
    );
}

#[test]
fn board_keys_round_trip() {
    for seed in 0..50 {
        let board = Board::new_random_with_seed(seed);
        let key = board.key();
        assert_eq!(Board::from_key(&key), board);
        assert_eq!(key.to_string().parse::<BoardKey>(), Ok(key));
    }
    assert_eq!(Board::goal().key(), GOAL_KEY);
}

#[test]
fn report_serializes_to_json() {
    let board = parse_board("102345678").unwrap();
    let report = AStarSearch::new(board, Heuristic::manhattan()).run_report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["heuristic"], "manhattan");
    assert_eq!(json["solved"], true);
    assert_eq!(json["moves"], 1);
    assert_eq!(json["generated"], 4);
}

#[test]
fn hill_climbing_scenario() {
    let outcome = hill_climb(&QueenBoard::new(vec![0, 0, 0, 0]).unwrap());
    assert!(outcome.solved);
    assert_eq!(outcome.board.attacking_pairs(), 0);
    assert_eq!(outcome.cost, 36);
}
