//! Board position types.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). [`Position::ALL`] enumerates cells in row-major order, which is
/// also the deterministic scan order of the backtracking solver.
///
/// # Examples
///
/// ```
/// use gridpunch_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x, 4);
/// assert_eq!(pos.y, 2);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index (0-8).
    pub x: u8,
    /// Row index (0-8).
    pub y: u8,
}

impl Position {
    /// All 81 positions in row-major order (row 0 left to right, then row 1,
    /// and so on).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row indices.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x - self.x % 3,
            y: self.y - self.y % 3,
        }
    }

    /// Returns the index of this position in row-major cell order (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(1, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
    }

    #[test]
    fn box_indices() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn box_origins() {
        assert_eq!(Position::new(5, 7).box_origin(), Position::new(3, 6));
        assert_eq!(Position::new(2, 2).box_origin(), Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
