//! The two sides of a game.

use std::fmt;
use std::ops::Not;

use crate::cell::Cell;

/// A side: the human Player (side 0) or the computer Opponent (side 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Player = 0,
    Opponent = 1,
}

impl Side {
    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// Return the other side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Return the mark this side places on the board.
    #[inline]
    pub const fn mark(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Opponent => Cell::Opponent,
        }
    }

    /// Return the side owning `cell`, or `None` for an empty cell.
    #[inline]
    pub const fn owning(cell: Cell) -> Option<Side> {
        match cell {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Opponent => Some(Side::Opponent),
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Side;
    use crate::cell::Cell;

    #[test]
    fn flip_and_not() {
        assert_eq!(Side::Player.flip(), Side::Opponent);
        assert_eq!(!Side::Opponent, Side::Player);
        assert_eq!(!!Side::Player, Side::Player);
    }

    #[test]
    fn marks() {
        assert_eq!(Side::Player.mark(), Cell::Player);
        assert_eq!(Side::Opponent.mark(), Cell::Opponent);
        for side in Side::ALL {
            assert_eq!(Side::owning(side.mark()), Some(side));
        }
        assert_eq!(Side::owning(Cell::Empty), None);
    }
}
