//! Text notation for [`Board`]: nine row-major cells, optionally split
//! into rows with `/` (`XX./.O./...`).

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::NotationError;

/// Notation of the empty board.
pub const EMPTY_NOTATION: &str = ".../.../...";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let s = s.trim();
        let mut cells = [Cell::Empty; Board::CELLS];

        if s.contains('/') {
            let rows: Vec<&str> = s.split('/').collect();
            if rows.len() != Board::SIZE {
                return Err(NotationError::WrongRowCount { found: rows.len() });
            }
            for (row, text) in rows.iter().enumerate() {
                let length = text.chars().count();
                if length != Board::SIZE {
                    return Err(NotationError::BadRowLength { row, length });
                }
                for (column, c) in text.chars().enumerate() {
                    cells[column + row * Board::SIZE] = parse_cell(c)?;
                }
            }
        } else {
            let found = s.chars().count();
            if found != Board::CELLS {
                return Err(NotationError::WrongCellCount { found });
            }
            for (index, c) in s.chars().enumerate() {
                cells[index] = parse_cell(c)?;
            }
        }

        Ok(Board::from_cells(cells))
    }
}

fn parse_cell(c: char) -> Result<Cell, NotationError> {
    Cell::from_char(c).ok_or(NotationError::InvalidCellChar { character: c })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells().iter().enumerate() {
            if index > 0 && index % Board::SIZE == 0 {
                write!(f, "/")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
