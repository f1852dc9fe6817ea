//! Puzzle generation: random seeding, hole punching, uniqueness probing.

use std::time::{SystemTime, UNIX_EPOCH};

use gridpunch_core::{Digit, DigitGrid, Position};
use gridpunch_solver::{BacktrackingSolver, SolverError};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{SolutionDigest, SolutionRegistry};

/// An error reported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The requested hole count exceeds the 81 cells of the board.
    #[display("hole count {holes} exceeds the 81 cells of the board")]
    HoleCountOutOfRange {
        /// The rejected hole count.
        holes: u8,
    },
    /// No acceptable puzzle was produced within the attempt budget.
    ///
    /// Every rejected seed, duplicate solution, and failed uniqueness probe
    /// consumes one attempt; when the budget runs out the batch fails instead
    /// of looping forever.
    #[display("could not generate a valid puzzle within {attempts} attempts")]
    AttemptsExhausted {
        /// The exhausted attempt budget.
        attempts: usize,
    },
    /// The solver rejected a grid.
    #[display("solver failed: {_0}")]
    Solver(SolverError),
}

impl From<SolverError> for GenerateError {
    fn from(err: SolverError) -> Self {
        Self::Solver(err)
    }
}

/// Configuration for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of cells to clear from the solved answer (0-81).
    ///
    /// A sane range for playable puzzles is roughly 20-55; values above 81
    /// are rejected outright.
    pub holes: u8,
    /// Seed-density multiplier: `9 * density` random placements are attempted
    /// before the solver completes the grid.
    ///
    /// Placements that land on an occupied cell or would break a constraint
    /// are skipped, not retried, so the seeded grid usually holds fewer than
    /// `9 * density` digits. A density of 0 seeds nothing, which makes every
    /// attempt complete to the same deterministic solution.
    pub density: u32,
    /// Verify that solving the punched puzzle reproduces the answer key.
    ///
    /// This is a deterministic single-probe check, not true uniqueness
    /// counting: it only detects an alternate solution that the solver's
    /// fixed search order reaches first on the punched grid.
    pub verify_unique: bool,
    /// Attempt budget for one [`PuzzleGenerator::generate`] call.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            holes: 20,
            density: 1,
            verify_unique: false,
            max_attempts: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Difficulty level 1: 20 holes, sparse seeding.
    #[must_use]
    pub fn easy() -> Self {
        Self {
            holes: 20,
            density: 1,
            ..Self::default()
        }
    }

    /// Difficulty level 2: 25 holes.
    #[must_use]
    pub fn medium() -> Self {
        Self {
            holes: 25,
            density: 2,
            ..Self::default()
        }
    }

    /// Difficulty level 3: 30 holes.
    #[must_use]
    pub fn hard() -> Self {
        Self {
            holes: 30,
            density: 3,
            ..Self::default()
        }
    }
}

/// A generated puzzle together with its answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle as presented to a player, with holes punched.
    pub problem: DigitGrid,
    /// The complete solution the puzzle was punched from.
    pub solution: DigitGrid,
}

impl GeneratedPuzzle {
    /// Returns the number of holes in the problem grid.
    #[must_use]
    pub fn holes(&self) -> usize {
        self.problem.empty_count()
    }
}

/// A sudoku puzzle generator.
///
/// Each [`generate`](Self::generate) call seeds a sparse random grid,
/// completes it with the backtracking solver, rejects solutions already seen
/// by the batch registry, punches the configured number of holes, and
/// optionally probes the punched grid for an alternate solution. Attempts
/// repeat until one succeeds or the configured budget is exhausted.
///
/// # Examples
///
/// ```
/// use gridpunch_generator::{PuzzleGenerator, SolutionRegistry};
///
/// let mut generator = PuzzleGenerator::with_seed(42);
/// let mut registry = SolutionRegistry::new();
///
/// let puzzle = generator.generate(&mut registry)?;
/// assert_eq!(puzzle.holes(), 20);
/// assert!(puzzle.solution.is_solved());
/// # Ok::<(), gridpunch_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<R = Pcg64Mcg> {
    rng: R,
    config: GeneratorConfig,
    solver: BacktrackingSolver,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator seeded from the system clock.
    ///
    /// The clock is read once per generator. On coarse clocks, generators
    /// created in rapid succession can observe the same reading and produce
    /// correlated sequences; use [`with_seed`](Self::with_seed) when
    /// independent or reproducible streams matter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Creates a generator with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Pcg64Mcg::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    /// Creates a generator driven by the given random number generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
            solver: BacktrackingSolver::new(),
        }
    }

    /// Replaces the generation configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one puzzle, registering its solution digest in `registry`.
    ///
    /// Solutions whose digest is already present in the registry are
    /// discarded and regenerated, so every puzzle produced against the same
    /// registry has a distinct answer key.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::HoleCountOutOfRange`] if the configured hole count
    ///   exceeds 81.
    /// - [`GenerateError::AttemptsExhausted`] if no puzzle passed the
    ///   completion, dedup, and uniqueness phases within the attempt budget.
    pub fn generate(
        &mut self,
        registry: &mut SolutionRegistry,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let config = self.config;
        if config.holes > 81 {
            return Err(GenerateError::HoleCountOutOfRange {
                holes: config.holes,
            });
        }

        for _ in 0..config.max_attempts {
            let mut grid = self.seed_grid();
            if !self.solver.solve(&mut grid)? {
                // Unsatisfiable seed; try a fresh one.
                continue;
            }

            let digest = SolutionDigest::of_grid(&grid);
            if !registry.insert(digest) {
                // This run already produced the same answer key.
                continue;
            }

            let solution = grid;
            let mut problem = solution.clone();
            self.punch_holes(&mut problem, config.holes);

            if config.verify_unique && !self.reaches_same_solution(&problem, &solution)? {
                continue;
            }

            return Ok(GeneratedPuzzle { problem, solution });
        }

        Err(GenerateError::AttemptsExhausted {
            attempts: config.max_attempts,
        })
    }

    /// Generates a batch of puzzles with a fresh registry.
    ///
    /// The registry lives exactly as long as the batch: answer keys are
    /// distinct within the batch but may repeat across batches.
    ///
    /// # Errors
    ///
    /// Fails with the first error of any single generation; see
    /// [`generate`](Self::generate).
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<GeneratedPuzzle>, GenerateError> {
        let mut registry = SolutionRegistry::new();
        (0..count).map(|_| self.generate(&mut registry)).collect()
    }

    /// Seed phase: attempt `9 * density` random legal placements.
    fn seed_grid(&mut self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for _ in 0..9 * u64::from(self.config.density) {
            let pos = self.random_position();
            let digit = Digit::from_value(self.rng.random_range(1..=9));
            if grid[pos].is_none() && grid.is_legal(pos, digit) {
                grid[pos] = Some(digit);
            }
        }
        grid
    }

    /// Hole-punching phase: clear exactly `holes` distinct cells.
    ///
    /// Picks uniformly random positions; a pick that is already empty does
    /// not count toward progress. Requires `holes <= 81` to terminate.
    fn punch_holes(&mut self, grid: &mut DigitGrid, holes: u8) {
        debug_assert!(holes <= 81);
        let mut cleared = 0;
        while cleared < holes {
            let pos = self.random_position();
            if grid[pos].is_some() {
                grid[pos] = None;
                cleared += 1;
            }
        }
    }

    /// Uniqueness probe: `true` if re-solving the punched grid reproduces the
    /// answer key cell-for-cell.
    ///
    /// A mismatch anywhere proves a different solution is reachable by the
    /// solver's deterministic search order. The converse does not hold; this
    /// is a weak approximation of true uniqueness, not solution counting.
    fn reaches_same_solution(
        &self,
        problem: &DigitGrid,
        solution: &DigitGrid,
    ) -> Result<bool, SolverError> {
        let resolved = self.solver.solution(problem)?;
        Ok(resolved.as_ref() == Some(solution))
    }

    fn random_position(&mut self) -> Position {
        Position::new(self.rng.random_range(0..9), self.rng.random_range(0..9))
    }
}

/// Reads a one-shot RNG seed from the system clock.
#[expect(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(config: GeneratorConfig) -> PuzzleGenerator {
        PuzzleGenerator::with_seed(42).with_config(config)
    }

    #[test]
    fn generates_solvable_puzzle_with_exact_hole_count() {
        // Scenario: holes=20, difficulty/density=1.
        let mut registry = SolutionRegistry::new();
        let puzzle = generator(GeneratorConfig::easy())
            .generate(&mut registry)
            .unwrap();

        assert_eq!(puzzle.holes(), 20);
        assert_eq!(puzzle.problem.filled_count(), 61);
        assert!(puzzle.solution.is_solved());

        // The problem is the solution with holes punched, nothing else.
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }

        // Solving the problem yields a complete valid sudoku.
        let solved = BacktrackingSolver::new()
            .solution(&puzzle.problem)
            .unwrap()
            .unwrap();
        assert!(solved.is_solved());
    }

    #[test]
    fn hole_count_edge_values() {
        for holes in [0, 55, 81] {
            let config = GeneratorConfig {
                holes,
                ..GeneratorConfig::default()
            };
            let mut registry = SolutionRegistry::new();
            let puzzle = generator(config).generate(&mut registry).unwrap();
            assert_eq!(puzzle.holes(), usize::from(holes));
            assert_eq!(puzzle.problem.filled_count(), 81 - usize::from(holes));
        }
    }

    #[test]
    fn hole_count_above_board_size_is_rejected() {
        let config = GeneratorConfig {
            holes: 82,
            ..GeneratorConfig::default()
        };
        let mut registry = SolutionRegistry::new();
        assert_eq!(
            generator(config).generate(&mut registry),
            Err(GenerateError::HoleCountOutOfRange { holes: 82 })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unique_puzzle_round_trips_to_its_answer_key() {
        let config = GeneratorConfig {
            holes: 25,
            verify_unique: true,
            ..GeneratorConfig::default()
        };
        let mut registry = SolutionRegistry::new();
        let puzzle = generator(config).generate(&mut registry).unwrap();

        let solved = BacktrackingSolver::new()
            .solution(&puzzle.problem)
            .unwrap()
            .unwrap();
        assert_eq!(solved, puzzle.solution);
    }

    #[test]
    fn batch_answer_keys_are_distinct() {
        let puzzles = generator(GeneratorConfig::easy())
            .generate_batch(5)
            .unwrap();
        assert_eq!(puzzles.len(), 5);

        let mut registry = SolutionRegistry::new();
        for puzzle in &puzzles {
            assert!(registry.insert(SolutionDigest::of_grid(&puzzle.solution)));
        }
    }

    #[test]
    fn registry_rejects_replayed_solutions() {
        // Two generators with the same seed produce the same first solution;
        // a shared registry forces the second one onto a different answer.
        let mut registry = SolutionRegistry::new();
        let first = generator(GeneratorConfig::easy())
            .generate(&mut registry)
            .unwrap();
        let second = generator(GeneratorConfig::easy())
            .generate(&mut registry)
            .unwrap();
        assert_ne!(first.solution, second.solution);
    }

    #[test]
    fn exhausted_budget_is_an_error_not_a_hang() {
        // Same seed, shared registry, and a budget of one: the only attempt
        // reproduces the registered solution and is rejected.
        let mut registry = SolutionRegistry::new();
        generator(GeneratorConfig::easy())
            .generate(&mut registry)
            .unwrap();

        let config = GeneratorConfig {
            max_attempts: 1,
            ..GeneratorConfig::easy()
        };
        assert_eq!(
            generator(config).generate(&mut registry),
            Err(GenerateError::AttemptsExhausted { attempts: 1 })
        );
    }

    #[test]
    fn zero_attempt_budget_fails_immediately() {
        let config = GeneratorConfig {
            max_attempts: 0,
            ..GeneratorConfig::default()
        };
        let mut registry = SolutionRegistry::new();
        assert_eq!(
            generator(config).generate(&mut registry),
            Err(GenerateError::AttemptsExhausted { attempts: 0 })
        );
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut a = SolutionRegistry::new();
        let mut b = SolutionRegistry::new();
        let first = generator(GeneratorConfig::easy()).generate(&mut a).unwrap();
        let second = generator(GeneratorConfig::easy()).generate(&mut b).unwrap();
        assert_eq!(first, second);
    }
}
