//! The 3×3 board: cell contents plus the move history used for undo.

use std::fmt;

use tracing::debug;

use crate::cell::Cell;
use crate::lines::WIN_LINES;
use crate::moves::Move;
use crate::outcome::Outcome;
use crate::side::Side;

/// Complete game position.
///
/// Exactly the cells recorded in `history` are non-empty; the top of the
/// history is the most recent move still on the board.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Row-major cells, index = column + row * 3.
    cells: [Cell; Board::CELLS],
    /// Applied moves in chronological order.
    history: Vec<Move>,
}

impl Board {
    /// Number of cells.
    pub const CELLS: usize = 9;

    /// Board width and height.
    pub const SIZE: usize = 3;

    /// Return an empty board.
    pub fn new() -> Board {
        Board {
            cells: [Cell::Empty; Board::CELLS],
            history: Vec::with_capacity(Board::CELLS),
        }
    }

    /// Build a position from raw cells.
    ///
    /// Occupied cells are recorded in the history in ascending index order.
    pub fn from_cells(cells: [Cell; Board::CELLS]) -> Board {
        let history = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(index, &mark)| Move::new(mark, index))
            .collect();
        Board { cells, history }
    }

    /// Map a (column, row) pair to a cell index.
    #[inline]
    pub const fn index_of(column: usize, row: usize) -> Option<usize> {
        if column < Board::SIZE && row < Board::SIZE {
            Some(column + row * Board::SIZE)
        } else {
            None
        }
    }

    /// Map a cell index back to its (column, row) pair.
    #[inline]
    pub const fn coords_of(index: usize) -> Option<(usize, usize)> {
        if index < Board::CELLS {
            Some((index % Board::SIZE, index / Board::SIZE))
        } else {
            None
        }
    }

    /// Clear every cell and the history.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; Board::CELLS];
        self.history.clear();
    }

    /// Return the cell at `index`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Return all cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell; Board::CELLS] {
        &self.cells
    }

    /// Return the applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Return `true` if `index` is on the board and currently empty.
    #[inline]
    pub fn is_vacant(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_empty)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Place `mark` on `index` and record it in the history.
    ///
    /// An empty mark, an out-of-range index, or an occupied target leaves
    /// the board untouched.
    pub fn apply_move(&mut self, mark: Cell, index: usize) {
        if mark.is_empty() || !self.is_vacant(index) {
            debug!(%mark, index, "ignoring illegal move");
            return;
        }
        self.cells[index] = mark;
        self.history.push(Move::new(mark, index));
    }

    /// Take back the most recent move. Returns the move removed, if any.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.cells[last.index] = Cell::Empty;
        Some(last)
    }

    /// Return the side owning a completed line, if any.
    ///
    /// Lines are scanned in [`WIN_LINES`] order and the first complete one
    /// decides.
    pub fn winner(&self) -> Option<Side> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a];
            if mark == self.cells[b] && mark == self.cells[c] {
                Side::owning(mark)
            } else {
                None
            }
        })
    }

    /// Return the current outcome.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Side::Player) => Outcome::PlayerWins,
            Some(Side::Opponent) => Outcome::OpponentWins,
            None if self.empty_count() == 0 => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Return `true` if a line is complete or no empty cell remains.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_over()
    }

    /// Return one move per empty cell for `side`, in ascending index order.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mark = side.mark();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Move::new(mark, index))
            .collect()
    }

    /// Return a position with every mark handed to the other side.
    pub fn swapped(&self) -> Board {
        Board {
            cells: self.cells.map(Cell::swapped),
            history: self
                .history
                .iter()
                .map(|mv| Move::new(mv.mark.swapped(), mv.index))
                .collect(),
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 3×3 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.cells.chunks(Board::SIZE);
        for (row_idx, row) in rows.enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}  ", row_idx)?;
            for (column, cell) in row.iter().enumerate() {
                if column < Board::SIZE - 1 {
                    write!(f, "{cell} ")?;
                } else {
                    write!(f, "{cell}")?;
                }
            }
        }
        writeln!(f)?;
        write!(f, "   0 1 2")
    }
}
