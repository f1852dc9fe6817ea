//! Brute-force backtracking solver for 9×9 sudoku grids.
//!
//! The solver completes a partially filled [`DigitGrid`] by exhaustive
//! search, or reports that no completion exists. Input grids are validated
//! for pre-existing constraint violations before the search starts.
//!
//! # Examples
//!
//! ```
//! use gridpunch_core::DigitGrid;
//! use gridpunch_solver::BacktrackingSolver;
//!
//! let solver = BacktrackingSolver::new();
//! let mut grid = DigitGrid::new();
//!
//! assert_eq!(solver.solve(&mut grid), Ok(true));
//! assert!(grid.is_solved());
//! ```
//!
//! [`DigitGrid`]: gridpunch_core::DigitGrid

pub mod backtracking;

pub use self::backtracking::{BacktrackingSolver, SolverError};
