//! Core data structures for the gridpunch sudoku tools.
//!
//! This crate provides the 9×9 grid model shared by the solver and the
//! generator:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`Position`]: board (x, y) coordinates with row-major enumeration
//! - [`DigitGrid`]: cell storage with legality checks, consistency
//!   validation, and conversions to and from the external 9×9 integer-matrix
//!   contract (`0` is the empty sentinel everywhere)
//!
//! # Examples
//!
//! ```
//! use gridpunch_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 is no longer legal anywhere in row 0, column 0, or the top-left box.
//! assert!(!grid.is_legal(Position::new(3, 0), Digit::D5));
//! assert!(grid.is_legal(Position::new(3, 3), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{ConsistencyError, DigitGrid, GridParseError},
    position::Position,
};
