//! Static line-based evaluation.
//!
//! Every open line is scored by how many marks one side has on it. Mixed
//! lines are dead and score nothing. Positive scores favour the Opponent.

use tictac_core::{Board, LineTally, WIN_LINES};

/// Contribution of an open line holding 0..=3 Player marks.
const PLAYER_LINE: [i32; 4] = [1, -10, -100, -1000];

/// Contribution of an open line holding 0..=3 Opponent marks.
const OPPONENT_LINE: [i32; 4] = [1, 10, 100, 1000];

/// Score a single line.
#[inline]
pub fn line_score(tally: LineTally) -> i32 {
    if tally.is_mixed() {
        0
    } else if tally.opponent == 0 {
        PLAYER_LINE[tally.player as usize]
    } else {
        OPPONENT_LINE[tally.opponent as usize]
    }
}

/// Evaluate the position from the Opponent's point of view.
pub fn evaluate(board: &Board) -> i32 {
    WIN_LINES
        .iter()
        .map(|line| line_score(LineTally::of(board.cells(), line)))
        .sum()
}
