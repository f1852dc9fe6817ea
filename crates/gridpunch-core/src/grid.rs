//! The 9×9 digit grid and its constraint checks.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// An inconsistency found in a grid: some digit occurs more than once in a
/// row, column, or 3×3 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A digit occurs more than once in a row.
    #[display("digit {digit} occurs more than once in row {y}")]
    DuplicateInRow {
        /// Row index (0-8).
        y: u8,
        /// The duplicated digit.
        digit: Digit,
    },
    /// A digit occurs more than once in a column.
    #[display("digit {digit} occurs more than once in column {x}")]
    DuplicateInColumn {
        /// Column index (0-8).
        x: u8,
        /// The duplicated digit.
        digit: Digit,
    },
    /// A digit occurs more than once in a 3×3 box.
    #[display("digit {digit} occurs more than once in box {index}")]
    DuplicateInBox {
        /// Box index (0-8).
        index: u8,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// An error encountered while building a grid from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input matrix does not have exactly 9 rows.
    #[display("expected 9 rows, got {count}")]
    RowCount {
        /// Number of rows supplied.
        count: usize,
    },
    /// A row of the input matrix does not have exactly 9 columns.
    #[display("expected 9 values in row {y}, got {len}")]
    RowLength {
        /// Row index of the offending row.
        y: usize,
        /// Number of values in that row.
        len: usize,
    },
    /// A cell value is neither the empty sentinel (0) nor a digit 1-9.
    #[display("invalid cell value {value} at {pos}")]
    InvalidValue {
        /// Position of the offending cell.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
    /// A grid string contains a character other than a digit, `.`, `_`, `0`,
    /// or whitespace.
    #[display("invalid character {c:?} in grid string")]
    InvalidCharacter {
        /// The rejected character.
        c: char,
    },
    /// A grid string does not contain exactly 81 cells.
    #[display("expected 81 cells in grid string, got {count}")]
    CellCount {
        /// Number of cells supplied.
        count: usize,
    },
}

/// A 9×9 grid of optional digits.
///
/// Cells are stored in row-major order and indexed by [`Position`]. Equality
/// and hashing consider cell values only, so two grids with the same digits in
/// the same cells compare equal regardless of how they were built.
///
/// # Examples
///
/// ```
/// use gridpunch_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert!(!grid.is_legal(Position::new(8, 0), Digit::D5)); // same row
/// assert!(grid.is_legal(Position::new(8, 8), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.cell_index()]
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// This is the deterministic tie-break used by the backtracking search:
    /// lowest row first, then lowest column.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate an
    /// existing digit in the row, column, or 3×3 box of `pos`.
    ///
    /// The cell at `pos` itself is ignored, so a digit is always legal at the
    /// cell it already occupies. No side effects.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        !self.used_in_row(pos, digit)
            && !self.used_in_column(pos, digit)
            && !self.used_in_box(pos, digit)
    }

    fn used_in_row(&self, pos: Position, digit: Digit) -> bool {
        (0..9).any(|x| {
            let other = Position::new(x, pos.y);
            other != pos && self[other] == Some(digit)
        })
    }

    fn used_in_column(&self, pos: Position, digit: Digit) -> bool {
        (0..9).any(|y| {
            let other = Position::new(pos.x, y);
            other != pos && self[other] == Some(digit)
        })
    }

    fn used_in_box(&self, pos: Position, digit: Digit) -> bool {
        let origin = pos.box_origin();
        (0..9).any(|i| {
            let other = Position::new(origin.x + i % 3, origin.y + i / 3);
            other != pos && self[other] == Some(digit)
        })
    }

    /// Checks that no digit occurs twice in any row, column, or 3×3 box.
    ///
    /// Grids built from external input must pass this check before being
    /// handed to the solver; the search assumes its starting point is
    /// consistent.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found, scanning rows, then
    /// columns, then boxes.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for y in 0..9 {
            let cells = (0..9).map(|x| self[Position::new(x, y)]);
            if let Some(digit) = first_duplicate(cells) {
                return Err(ConsistencyError::DuplicateInRow { y, digit });
            }
        }
        for x in 0..9 {
            let cells = (0..9).map(|y| self[Position::new(x, y)]);
            if let Some(digit) = first_duplicate(cells) {
                return Err(ConsistencyError::DuplicateInColumn { x, digit });
            }
        }
        for index in 0..9 {
            let origin = Position::new(index % 3 * 3, index / 3 * 3);
            let cells = (0..9).map(|i| self[Position::new(origin.x + i % 3, origin.y + i / 3)]);
            if let Some(digit) = first_duplicate(cells) {
                return Err(ConsistencyError::DuplicateInBox { index, digit });
            }
        }
        Ok(())
    }

    /// Returns `true` if the grid is completely filled and every row, column,
    /// and 3×3 box contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.check_consistency().is_ok()
    }

    /// Builds a grid from a 9×9 integer matrix.
    ///
    /// The empty sentinel is `0`; all other values must be in 1-9. This is
    /// the input contract for external collaborators: any other shape or
    /// value is rejected before it can reach the solver.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] if the matrix is not 9×9 or contains a
    /// value outside 0-9.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridParseError> {
        if rows.len() != 9 {
            return Err(GridParseError::RowCount { count: rows.len() });
        }
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 9 {
                return Err(GridParseError::RowLength { y, len: row.len() });
            }
            for (x, &value) in row.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                grid[pos] = match value {
                    0 => None,
                    _ => Some(
                        Digit::try_from_value(value)
                            .ok_or(GridParseError::InvalidValue { pos, value })?,
                    ),
                };
            }
        }
        Ok(grid)
    }

    /// Returns the grid as a 9×9 integer matrix, using `0` for empty cells.
    ///
    /// This is the output contract for external collaborators; on solver
    /// success no cell holds the sentinel.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[pos.y as usize][pos.x as usize] = self[pos].map_or(0, Digit::value);
        }
        rows
    }
}

/// Returns the first digit that occurs more than once among `cells`.
fn first_duplicate(cells: impl Iterator<Item = Option<Digit>>) -> Option<Digit> {
    let mut seen = [false; 9];
    for digit in cells.flatten() {
        let i = usize::from(digit.value()) - 1;
        if seen[i] {
            return Some(digit);
        }
        seen[i] = true;
    }
    None
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    /// Parses a grid from flat row-major text.
    ///
    /// Digits 1-9 are filled cells; `.`, `_`, and `0` are empty cells;
    /// whitespace is ignored. Exactly 81 cells are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::from_value(c as u8 - b'0')),
                _ => return Err(GridParseError::InvalidCharacter { c }),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::CellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    /// Formats the grid as 81 row-major characters, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
