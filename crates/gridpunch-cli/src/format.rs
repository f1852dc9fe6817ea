//! The flat puzzle file format.
//!
//! Each grid is 9 lines of 9 whitespace-separated values; `$` or `0` marks an
//! empty cell. Grids are separated by blank lines. A file may hold any number
//! of grids.

use std::io::{self, Write};

use gridpunch_core::{DigitGrid, GridParseError, Position};

/// Parses every grid found in `text`.
///
/// Blank lines are skipped; every 9 consecutive non-blank lines form one
/// grid. Shape is validated before any grid reaches a solver: a trailing
/// partial grid or a row with the wrong number of values is an error.
///
/// # Errors
///
/// Returns [`GridParseError`] for malformed shapes, unparseable tokens, or
/// out-of-range values.
pub fn parse_grids(text: &str) -> Result<Vec<DigitGrid>, GridParseError> {
    let mut grids = Vec::new();
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(line)?);
        if rows.len() == 9 {
            grids.push(DigitGrid::from_rows(&rows)?);
            rows.clear();
        }
    }

    if !rows.is_empty() {
        // Trailing partial grid.
        return Err(GridParseError::RowCount { count: rows.len() });
    }
    Ok(grids)
}

fn parse_row(line: &str) -> Result<Vec<u8>, GridParseError> {
    line.split_whitespace()
        .map(|token| match token {
            "$" => Ok(0),
            _ => token.parse::<u8>().map_err(|_| {
                let c = token.chars().next().unwrap_or(' ');
                GridParseError::InvalidCharacter { c }
            }),
        })
        .collect()
}

/// Writes one grid in the flat file format, followed by a blank line.
///
/// Filled cells are written as their digit, empty cells as `$`.
///
/// # Errors
///
/// Propagates I/O errors from the writer.
pub fn write_grid<W: Write>(writer: &mut W, grid: &DigitGrid) -> io::Result<()> {
    for y in 0..9 {
        for x in 0..9 {
            match grid[Position::new(x, y)] {
                Some(digit) => write!(writer, "{digit}")?,
                None => write!(writer, "$")?,
            }
            writer.write_all(if x == 8 { b"\n" } else { b" " })?;
        }
    }
    writer.write_all(b"\n")
}
