use crate::error::PuzzleError;
use crate::queens::{max_non_attacking_pairs, QueenBoard, QueensOutcome};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Smallest population the algorithm can draw two parents and survivors from.
pub const MIN_POPULATION: usize = 4;

/// Limits for a genetic run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneticConfig {
    /// Generations to breed before giving up; sizes with no solution (2 and 3 queens)
    /// would otherwise never terminate.
    pub max_generations: u64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            max_generations: 100_000,
        }
    }
}

#[derive(Clone, Debug)]
struct Member {
    board: QueenBoard,
    fitness: u32,
    /// Cumulative fitness of every less-fit member; drives roulette selection.
    weight: u32,
}

impl Member {
    fn new(board: QueenBoard) -> Self {
        let fitness = board.non_attacking_pairs();
        Member {
            board,
            fitness,
            weight: 0,
        }
    }
}

/// Genetic algorithm for N-Queens.
///
/// A generation proceeds as follows:
/// 1. Sort the population by fitness (non-attacking pairs) and stop if the fittest
///    member has no attacking pair.
/// 2. Draw two parents by fitness-weighted roulette, without replacement.
/// 3. Drop the least-fit quarter (plus one) of the remaining members.
/// 4. Breed the next generation: the parents' own child, then children of a random
///    parent and a random survivor until the population is full again.
/// 5. Mutate the least-fit quarter of the new generation.
///
/// The reported cost is the number of generations bred.
pub struct Genetic {
    population: Vec<Member>,
    population_size: usize,
    board_size: usize,
    total_fitness: u32,
    rng: SmallRng,
    config: GeneticConfig,
}

impl Genetic {
    /// Prepares a run over `population`, seeding the generator with `seed`.
    ///
    /// # Errors
    /// Returns `PuzzleError::PopulationTooSmall` for fewer than four members and
    /// `PuzzleError::MixedBoardSizes` if the boards differ in size.
    pub fn new(population: Vec<QueenBoard>, seed: u64) -> Result<Self, PuzzleError> {
        if population.len() < MIN_POPULATION {
            return Err(PuzzleError::PopulationTooSmall {
                size: population.len(),
                min: MIN_POPULATION,
            });
        }
        let board_size = population[0].size();
        if board_size == 0 {
            return Err(PuzzleError::QueenCount {
                size: board_size,
                min: 1,
            });
        }
        if let Some(other) = population.iter().find(|b| b.size() != board_size) {
            return Err(PuzzleError::MixedBoardSizes {
                expected: board_size,
                found: other.size(),
            });
        }

        Ok(Genetic {
            population_size: population.len(),
            population: population.into_iter().map(Member::new).collect(),
            board_size,
            total_fitness: 0,
            rng: SmallRng::seed_from_u64(seed),
            config: GeneticConfig::default(),
        })
    }

    pub fn with_config(mut self, config: GeneticConfig) -> Self {
        self.config = config;
        self
    }

    /// Breeds generations until a solution appears or the generation cap is hit.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::genetic::{random_population, Genetic};
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(3);
    /// let outcome = Genetic::new(random_population(4, 8, &mut rng), 3)
    ///     .unwrap()
    ///     .solve();
    /// assert!(outcome.solved);
    /// assert!(outcome.board.is_solution());
    /// ```
    pub fn solve(mut self) -> QueensOutcome {
        let target = max_non_attacking_pairs(self.board_size);
        let mut generations = 0u64;

        loop {
            self.assign_weights();

            let fittest = &self.population[self.population.len() - 1];
            if fittest.fitness == target {
                return QueensOutcome {
                    solved: true,
                    board: fittest.board.clone(),
                    cost: generations,
                };
            }
            if generations >= self.config.max_generations {
                return QueensOutcome {
                    solved: false,
                    board: fittest.board.clone(),
                    cost: generations,
                };
            }

            let parent1 = self.select_parent();
            let parent2 = self.select_parent();

            let mut successors = Vec::with_capacity(self.population_size);
            successors.push(Member::new(self.crossover(&parent1, &parent2)));

            let culled = (self.population.len() / 4 + 1).min(self.population.len() - 1);
            self.population.drain(0..culled);

            self.reproduce(&mut successors, &parent1, &parent2);
            successors.sort_by_key(|m| m.fitness);
            self.mutate(&mut successors);

            self.population = successors;
            generations += 1;
        }
    }

    /// Sorts members by ascending fitness and gives each the fitness sum of the
    /// members before it.
    fn assign_weights(&mut self) {
        self.population.sort_by_key(|m| m.fitness);
        self.total_fitness = 0;
        for member in &mut self.population {
            member.weight = self.total_fitness;
            self.total_fitness += member.fitness;
        }
    }

    /// Removes and returns one member, fitter members being more likely.
    fn select_parent(&mut self) -> QueenBoard {
        let draw = if self.total_fitness > 0 {
            self.rng.gen_range(0..self.total_fitness)
        } else {
            0
        };

        let mut index = 0;
        while index < self.population.len() - 1 && draw > self.population[index].weight {
            index += 1;
        }

        let chosen = self.population.remove(index);
        self.total_fitness -= chosen.fitness;
        for member in &mut self.population[index..] {
            member.weight -= chosen.fitness;
        }
        chosen.board
    }

    /// Single-point crossover: columns before a random cut come from `a`, the rest
    /// from `b`.
    fn crossover(&mut self, a: &QueenBoard, b: &QueenBoard) -> QueenBoard {
        let cut = self.rng.gen_range(0..self.board_size);
        let rows = a.rows()[..cut]
            .iter()
            .chain(&b.rows()[cut..])
            .copied()
            .collect();
        // Both parents hold rows below `board_size`, so the child does too.
        QueenBoard::new(rows).unwrap_or_else(|_| a.clone())
    }

    fn reproduce(&mut self, successors: &mut Vec<Member>, parent1: &QueenBoard, parent2: &QueenBoard) {
        while successors.len() < self.population_size {
            let index = self.rng.gen_range(0..self.population.len());
            let mate = self.population[index].board.clone();
            let child = if self.rng.gen_bool(0.5) {
                self.crossover(parent1, &mate)
            } else {
                self.crossover(parent2, &mate)
            };
            successors.push(Member::new(child));
        }
    }

    /// Moves one random queen of each least-fit-quarter member to a random row.
    fn mutate(&mut self, successors: &mut [Member]) {
        let count = successors.len() / 4;
        for member in successors.iter_mut().take(count) {
            let col = self.rng.gen_range(0..self.board_size);
            let row = self.rng.gen_range(0..self.board_size);
            *member = Member::new(member.board.with_queen_at(col, row));
        }
    }
}

/// Builds `count` random boards of `size` queens.
pub fn random_population(size: usize, count: usize, rng: &mut impl Rng) -> Vec<QueenBoard> {
    (0..count).map(|_| QueenBoard::new_random(size, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_population(size: usize, count: usize, seed: u64) -> Vec<QueenBoard> {
        let mut rng = SmallRng::seed_from_u64(seed);
        random_population(size, count, &mut rng)
    }

    #[test]
    fn test_population_too_small() {
        let result = Genetic::new(seeded_population(8, 3, 1), 1);
        assert!(matches!(
            result,
            Err(PuzzleError::PopulationTooSmall { size: 3, min: 4 })
        ));
    }

    #[test]
    fn test_mixed_board_sizes() {
        let mut population = seeded_population(5, 4, 1);
        population.push(QueenBoard::new_random_with_seed(6, 1));
        assert!(matches!(
            Genetic::new(population, 1),
            Err(PuzzleError::MixedBoardSizes {
                expected: 5,
                found: 6
            })
        ));
    }

    #[test]
    fn test_solves_four_queens() {
        let outcome = Genetic::new(seeded_population(4, 8, 11), 11).unwrap().solve();
        assert!(outcome.solved);
        assert!(outcome.board.is_solution());
        assert_eq!(outcome.board.size(), 4);
    }

    #[test]
    fn test_solves_six_queens() {
        let outcome = Genetic::new(seeded_population(6, 20, 5), 5).unwrap().solve();
        assert!(outcome.solved);
        assert!(outcome.board.is_solution());
    }

    #[test]
    fn test_solution_in_initial_population_costs_nothing() {
        let mut population = seeded_population(4, 5, 2);
        population.push(QueenBoard::new(vec![2, 0, 3, 1]).unwrap());
        let outcome = Genetic::new(population, 2).unwrap().solve();
        assert!(outcome.solved);
        assert_eq!(outcome.cost, 0);
        assert!(outcome.board.is_solution());
    }

    #[test]
    fn test_generation_cap_reports_failure() {
        // Three queens cannot be placed without an attack.
        let outcome = Genetic::new(seeded_population(3, 6, 9), 9)
            .unwrap()
            .with_config(GeneticConfig { max_generations: 40 })
            .solve();
        assert!(!outcome.solved);
        assert_eq!(outcome.cost, 40);
        assert_eq!(outcome.board.size(), 3);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let a = Genetic::new(seeded_population(5, 10, 21), 21).unwrap().solve();
        let b = Genetic::new(seeded_population(5, 10, 21), 21).unwrap().solve();
        assert_eq!(a, b);
    }

    #[test]
    fn test_population_size_is_preserved() {
        let mut genetic = Genetic::new(seeded_population(6, 9, 4), 4).unwrap();
        genetic.assign_weights();
        let parent1 = genetic.select_parent();
        let parent2 = genetic.select_parent();
        assert_eq!(genetic.population.len(), 7);

        let mut successors = vec![Member::new(genetic.crossover(&parent1, &parent2))];
        genetic.reproduce(&mut successors, &parent1, &parent2);
        assert_eq!(successors.len(), 9);
        assert!(successors.iter().all(|m| m.board.size() == 6));
    }

    #[test]
    fn test_roulette_weights_stay_cumulative() {
        let mut genetic = Genetic::new(seeded_population(6, 8, 13), 13).unwrap();
        genetic.assign_weights();
        genetic.select_parent();

        let mut running = 0;
        for member in &genetic.population {
            assert_eq!(member.weight, running);
            running += member.fitness;
        }
        assert_eq!(genetic.total_fitness, running);
    }
}
