//! A single placement of a mark.

use std::fmt;

use crate::cell::Cell;

/// A mark placed on a cell index. Used for history entries, legal move
/// lists, and search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The mark placed. Never [`Cell::Empty`] for moves the board produces.
    pub mark: Cell,
    /// Row-major cell index (0..9).
    pub index: usize,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(mark: Cell, index: usize) -> Move {
        Move { mark, index }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mark, self.index)
    }
}
