//! The eight winning lines.

use crate::cell::Cell;

/// Index triples of every winning line: rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark counts along one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    /// Number of Player marks.
    pub player: u8,
    /// Number of Opponent marks.
    pub opponent: u8,
}

impl LineTally {
    /// Count the marks of `line` in `cells`.
    pub fn of(cells: &[Cell; 9], line: &[usize; 3]) -> LineTally {
        line.iter().fold(LineTally::default(), |mut tally, &i| {
            match cells[i] {
                Cell::Player => tally.player += 1,
                Cell::Opponent => tally.opponent += 1,
                Cell::Empty => {}
            }
            tally
        })
    }

    /// Return `true` if both sides have a mark on the line.
    #[inline]
    pub const fn is_mixed(self) -> bool {
        self.player > 0 && self.opponent > 0
    }
}
