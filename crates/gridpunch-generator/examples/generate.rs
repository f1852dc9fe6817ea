//! Example demonstrating basic puzzle generation.
//!
//! Generates a small batch of puzzles and prints each problem, its solution,
//! and the solution digest.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```

use std::process;

use gridpunch_generator::{GeneratorConfig, PuzzleGenerator, SolutionDigest};

fn main() {
    let config = GeneratorConfig {
        holes: 25,
        verify_unique: true,
        ..GeneratorConfig::default()
    };
    let mut generator = PuzzleGenerator::new().with_config(config);

    let puzzles = match generator.generate_batch(3) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    for (i, puzzle) in puzzles.iter().enumerate() {
        println!("Puzzle {i}:");
        println!("  problem:  {}", puzzle.problem);
        println!("  solution: {}", puzzle.solution);
        println!("  digest:   {}", SolutionDigest::of_grid(&puzzle.solution));
        println!();
    }
}
