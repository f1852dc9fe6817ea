//! Exhaustive backtracking search.

use gridpunch_core::{ConsistencyError, Digit, DigitGrid};

/// An error reported by the solver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The input grid already violates a row, column, or box constraint.
    ///
    /// The search assumes a consistent starting point, so inconsistent input
    /// is rejected up front instead of producing undefined results.
    #[display("inconsistent input grid: {_0}")]
    Inconsistent(ConsistencyError),
}

/// A brute-force sudoku solver.
///
/// The search scans for the first empty cell in row-major order (lowest row,
/// then lowest column) and tries candidate digits 1-9 in ascending order,
/// recursing on each legal placement and undoing it when the recursion fails.
/// There is no constraint propagation and no heuristic ordering; recursion
/// depth is bounded by the 81 cells of the board.
///
/// Worst-case cost is exponential, which is adequate here: generation always
/// starts the search from a sparse, usually satisfiable grid.
///
/// # Examples
///
/// ```
/// use gridpunch_solver::BacktrackingSolver;
///
/// let mut grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// let solver = BacktrackingSolver::new();
/// assert_eq!(solver.solve(&mut grid), Ok(true));
/// assert!(grid.is_solved());
/// # Ok::<(), gridpunch_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves the grid in place.
    ///
    /// On `Ok(true)` the grid holds a complete, constraint-satisfying
    /// assignment; every row, column, and 3×3 box is a permutation of 1-9.
    /// On `Ok(false)` no solution exists and the grid is left net-unchanged:
    /// every speculative assignment has been undone. An already-solved grid
    /// returns `Ok(true)` without mutation.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the input already contains a
    /// duplicate digit in some row, column, or box. The grid is not touched
    /// in that case.
    pub fn solve(&self, grid: &mut DigitGrid) -> Result<bool, SolverError> {
        grid.check_consistency()?;
        Ok(search(grid))
    }

    /// Returns a solved copy of the grid, or `None` if it is unsatisfiable.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the input already violates a
    /// constraint.
    pub fn solution(&self, grid: &DigitGrid) -> Result<Option<DigitGrid>, SolverError> {
        let mut copy = grid.clone();
        Ok(self.solve(&mut copy)?.then_some(copy))
    }
}

/// Recursive core: assumes `grid` is consistent.
fn search(grid: &mut DigitGrid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in Digit::ALL {
        if grid.is_legal(pos, digit) {
            grid[pos] = Some(digit);
            if search(grid) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}
