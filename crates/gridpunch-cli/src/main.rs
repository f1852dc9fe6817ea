//! The `gridpunch` command-line tool.
//!
//! Generates batches of sudoku puzzles to flat text files, or solves puzzles
//! read from one. See `gridpunch --help` for the full interface.

mod format;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::PathBuf,
    process,
};

use clap::{Args, Parser, Subcommand};
use gridpunch_core::GridParseError;
use gridpunch_generator::{GenerateError, GeneratorConfig, PuzzleGenerator, SolutionRegistry};
use gridpunch_solver::{BacktrackingSolver, SolverError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a batch of puzzles and their answer keys.
    Generate(GenerateArgs),
    /// Solve every puzzle found in a file.
    Solve(SolveArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Number of puzzles to generate.
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    count: u32,

    /// Difficulty level; sets the seeding density and the default hole count
    /// (20, 25, or 30).
    #[arg(
        short = 'm',
        long,
        value_name = "LEVEL",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=3)
    )]
    difficulty: u8,

    /// Number of holes to punch per puzzle (overrides the difficulty
    /// default). Playable puzzles usually want 20-55.
    #[arg(short = 'r', long, value_name = "HOLES")]
    holes: Option<u8>,

    /// Keep only puzzles whose re-solve reproduces the answer key.
    #[arg(short = 'u', long)]
    unique: bool,

    /// Fixed RNG seed; defaults to the system clock.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output file for the punched puzzles (overwritten each run).
    #[arg(short, long, value_name = "FILE", default_value = "sudoku.txt")]
    output: PathBuf,

    /// Output file for the answer keys (overwritten each run).
    #[arg(long, value_name = "FILE", default_value = "sudoku_ans.txt")]
    answers: PathBuf,
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Input file of puzzles to solve.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output file for the solutions (overwritten each run).
    #[arg(short, long, value_name = "FILE", default_value = "sudoku_ans.txt")]
    output: PathBuf,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("invalid puzzle input: {_0}")]
    Parse(GridParseError),
    #[display("{_0}")]
    Solve(SolverError),
    #[display("{_0}")]
    Generate(GenerateError),
    #[display("puzzle {index} in {path} has no solution")]
    #[from(ignore)]
    Unsolvable {
        /// Zero-based index of the puzzle within the input file.
        index: usize,
        /// Display form of the input path.
        path: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Solve(args) => solve(&args),
    }
}
fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let base = match args.difficulty {
        1 => GeneratorConfig::easy(),
        2 => GeneratorConfig::medium(),
        _ => GeneratorConfig::hard(),
    };
    let config = GeneratorConfig {
        holes: args.holes.unwrap_or(base.holes),
        verify_unique: args.unique,
        ..base
    };

    let mut generator = args
        .seed
        .map_or_else(PuzzleGenerator::new, PuzzleGenerator::with_seed)
        .with_config(config);

    // A run starts from fresh output files; grids accumulate only within it.
    let mut puzzle_file = BufWriter::new(File::create(&args.output)?);
    let mut answer_file = BufWriter::new(File::create(&args.answers)?);
    let mut registry = SolutionRegistry::new();

    for i in 1..=args.count {
        let puzzle = generator.generate(&mut registry)?;
        log::info!(
            "generated puzzle {i}/{} with {} holes",
            args.count,
            puzzle.holes()
        );
        format::write_grid(&mut puzzle_file, &puzzle.problem)?;
        format::write_grid(&mut answer_file, &puzzle.solution)?;
    }

    puzzle_file.flush()?;
    answer_file.flush()?;
    log::info!(
        "wrote {} puzzle(s) to {} and answers to {}",
        args.count,
        args.output.display(),
        args.answers.display()
    );
    Ok(())
}

fn solve(args: &SolveArgs) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.input)?;
    let grids = format::parse_grids(&text)?;

    let solver = BacktrackingSolver::new();
    let mut output = BufWriter::new(File::create(&args.output)?);

    for (index, grid) in grids.iter().enumerate() {
        let solved = solver.solution(grid)?.ok_or_else(|| CliError::Unsolvable {
            index,
            path: args.input.display().to_string(),
        })?;
        format::write_grid(&mut output, &solved)?;
    }

    output.flush()?;
    log::info!(
        "solved {} puzzle(s) from {}",
        grids.len(),
        args.input.display()
    );
    Ok(())
}
