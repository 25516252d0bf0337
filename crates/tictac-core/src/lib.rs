//! Core tic-tac-toe types: board representation, win lines, and game rules.

mod board;
mod cell;
mod error;
mod lines;
mod moves;
mod notation;
mod outcome;
mod side;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use error::NotationError;
pub use lines::{LineTally, WIN_LINES};
pub use moves::Move;
pub use notation::EMPTY_NOTATION;
pub use outcome::Outcome;
pub use side::Side;
