//! Game outcome derived from a position.

use std::fmt;

use crate::side::Side;

/// State of the game as read from the current cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    PlayerWins,
    OpponentWins,
    Draw,
}

impl Outcome {
    /// Return `true` once the game can no longer continue.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Return the winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::InProgress => "in-progress",
            Outcome::PlayerWins => "player-wins",
            Outcome::OpponentWins => "opponent-wins",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}
