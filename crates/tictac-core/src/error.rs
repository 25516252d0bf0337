//! Error types for board notation parsing.

/// Errors that occur when parsing a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The unseparated form does not describe exactly 9 cells.
    #[error("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// The `/`-separated form does not have exactly 3 rows.
    #[error("expected 3 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row in the `/`-separated form does not have exactly 3 cells.
    #[error("row {row} describes {length} cells, expected 3")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the notation.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}
