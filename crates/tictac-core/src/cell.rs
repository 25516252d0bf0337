//! Cell contents.

use std::fmt;

/// The contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Player = 1,
    Opponent = 2,
}

impl Cell {
    /// All cell values in index order.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::Player, Cell::Opponent];

    /// Return `true` for [`Cell::Empty`].
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return the mark belonging to the other side. `Empty` stays `Empty`.
    #[inline]
    pub const fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Player => Cell::Opponent,
            Cell::Opponent => Cell::Player,
        }
    }

    /// Return the display character (`X`, `O`, or `.`).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }

    /// Parse a cell character (case-insensitive). `.`, `_` and `-` mean empty.
    #[inline]
    pub fn from_char(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            'X' => Some(Cell::Player),
            'O' => Some(Cell::Opponent),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
