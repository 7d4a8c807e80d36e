use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::*;

const LIT: char = 'O';
const UNLIT: char = '.';

/// One line per row, `O` for a lit cell and `.` for an unlit one.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.as_array().rows().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &lit in row {
                f.write_char(if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Blank lines and whitespace between cells are ignored.
    fn from_str(text: &str) -> Result<Self> {
        let mut rows = 0;
        let mut cols = None;
        let mut cells = Vec::new();

        for line in text.lines() {
            let start = cells.len();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                cells.push(match ch {
                    LIT => true,
                    UNLIT => false,
                    other => return Err(GameError::InvalidCell(other)),
                });
            }

            let width = cells.len() - start;
            if width == 0 {
                continue;
            }
            if *cols.get_or_insert(width) != width {
                return Err(GameError::InvalidBoardShape);
            }
            rows += 1;
        }

        Board::from_cells(rows, cols.unwrap_or(0), cells)
    }
}
