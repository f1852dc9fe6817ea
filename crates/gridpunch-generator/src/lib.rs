//! Sudoku puzzle generation for the gridpunch tools.
//!
//! A [`PuzzleGenerator`] produces uniquely identified puzzles in four phases:
//! random sparse seeding, completion by the backtracking solver, answer-key
//! deduplication against a per-batch [`SolutionRegistry`], and hole punching
//! (optionally followed by a uniqueness probe of the punched grid).
//!
//! # Examples
//!
//! ```
//! use gridpunch_generator::{GeneratorConfig, PuzzleGenerator};
//!
//! let config = GeneratorConfig {
//!     holes: 25,
//!     verify_unique: true,
//!     ..GeneratorConfig::default()
//! };
//! let mut generator = PuzzleGenerator::with_seed(7).with_config(config);
//!
//! let puzzles = generator.generate_batch(3)?;
//! assert!(puzzles.iter().all(|p| p.holes() == 25));
//! # Ok::<(), gridpunch_generator::GenerateError>(())
//! ```

pub mod generator;
pub mod registry;

pub use self::{
    generator::{GeneratedPuzzle, GenerateError, GeneratorConfig, PuzzleGenerator},
    registry::{SolutionDigest, SolutionRegistry},
};
