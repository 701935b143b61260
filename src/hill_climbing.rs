use crate::queens::{QueenBoard, QueensOutcome};
use rand::Rng;

/// Solves N-Queens by steepest-ascent hill climbing.
///
/// Each round generates every board reachable by moving one queen within its column,
/// `n * (n - 1)` successors, and moves to the one with the fewest attacking pairs
/// (the first such successor on ties). The climb stops with success once no pair
/// attacks, or with failure as soon as the best successor is no better than the
/// current board. An already-solved board is returned at once.
///
/// # Arguments
/// * `initial`: The board to start climbing from.
///
/// # Returns
/// A `QueensOutcome` whose `cost` is the total number of successors generated.
///
/// # Examples
/// ```
/// use puzzle_search::hill_climbing::hill_climb;
/// use puzzle_search::queens::QueenBoard;
///
/// let outcome = hill_climb(&QueenBoard::new(vec![0, 0, 0, 0]).unwrap());
/// assert!(outcome.solved);
/// assert!(outcome.board.is_solution());
/// ```
pub fn hill_climb(initial: &QueenBoard) -> QueensOutcome {
    let n = initial.size();
    let mut board = initial.clone();
    let mut current = board.attacking_pairs();
    let mut cost = 0u64;

    while current > 0 {
        let mut best: Option<(u32, QueenBoard)> = None;

        for col in 0..n {
            for row in 0..n {
                if board.rows()[col] == row {
                    continue;
                }
                let successor = board.with_queen_at(col, row);
                let attacking = successor.attacking_pairs();
                cost += 1;
                if best.as_ref().map_or(true, |(b, _)| attacking < *b) {
                    best = Some((attacking, successor));
                }
            }
        }

        match best {
            Some((attacking, successor)) if attacking < current => {
                board = successor;
                current = attacking;
            }
            // Local minimum, plateau, or a one-queen board with no successors.
            _ => {
                return QueensOutcome {
                    solved: false,
                    board,
                    cost,
                }
            }
        }
    }

    QueensOutcome {
        solved: true,
        board,
        cost,
    }
}

/// Aggregate of many independent hill-climbing runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialSummary {
    pub trials: u32,
    pub solved: u32,
    pub total_cost: u64,
}

impl TrialSummary {
    /// Share of runs that reached a solution, in percent.
    pub fn solved_percent(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        f64::from(self.solved) * 100.0 / f64::from(self.trials)
    }

    /// Mean number of successors generated per run.
    pub fn average_cost(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_cost as f64 / f64::from(self.trials)
    }
}

/// Runs hill climbing on `trials` random boards of `size` queens.
pub fn run_trials(size: usize, trials: u32, rng: &mut impl Rng) -> TrialSummary {
    let mut summary = TrialSummary {
        trials,
        ..TrialSummary::default()
    };
    for _ in 0..trials {
        let outcome = hill_climb(&QueenBoard::new_random(size, rng));
        if outcome.solved {
            summary.solved += 1;
        }
        summary.total_cost += outcome.cost;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_hill_climb_solves_four_queens_from_one_row() {
        let outcome = hill_climb(&QueenBoard::new(vec![0, 0, 0, 0]).unwrap());
        assert!(outcome.solved);
        assert_eq!(outcome.board.rows(), &[1, 3, 0, 2]);
        // Three rounds of 12 successors each.
        assert_eq!(outcome.cost, 36);
    }

    #[test]
    fn test_hill_climb_already_solved() {
        let board = QueenBoard::new(vec![1, 3, 0, 2]).unwrap();
        let outcome = hill_climb(&board);
        assert!(outcome.solved);
        assert_eq!(outcome.board, board);
        assert_eq!(outcome.cost, 0);
    }

    #[test]
    fn test_hill_climb_stops_at_local_minimum() {
        let board = QueenBoard::new(vec![3, 1, 0, 2]).unwrap();
        let outcome = hill_climb(&board);
        assert!(!outcome.solved);
        assert_eq!(outcome.board, board);
        assert_eq!(outcome.cost, 12);
    }

    #[test]
    fn test_hill_climb_eight_queens_failure_is_reported() {
        let outcome = hill_climb(&QueenBoard::new(vec![0; 8]).unwrap());
        assert!(!outcome.solved);
        assert_eq!(outcome.board.rows(), &[1, 7, 0, 6, 3, 5, 0, 4]);
        assert_eq!(outcome.cost, 392);
    }

    #[test]
    fn test_hill_climb_single_queen() {
        let outcome = hill_climb(&QueenBoard::new(vec![0]).unwrap());
        assert!(outcome.solved);
        assert_eq!(outcome.cost, 0);
    }

    #[test]
    fn test_run_trials_accounting() {
        let mut rng = SmallRng::seed_from_u64(7);
        let summary = run_trials(8, 50, &mut rng);
        assert_eq!(summary.trials, 50);
        assert!(summary.solved <= 50);
        // Every round of an 8-queen climb generates 56 successors.
        assert_eq!(summary.total_cost % 56, 0);
        assert!(summary.solved_percent() <= 100.0);
        assert!(summary.average_cost() > 0.0);
    }

    #[test]
    fn test_trial_summary_empty() {
        let summary = TrialSummary::default();
        assert_eq!(summary.solved_percent(), 0.0);
        assert_eq!(summary.average_cost(), 0.0);
    }
}
