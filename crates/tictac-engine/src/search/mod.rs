//! Depth-limited minimax search.

pub mod minimax;

use tictac_core::{Board, Move, Side};
use tracing::debug;

use minimax::{SearchContext, minimax};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side searched, or `None` if the position was
    /// already over or the depth was zero.
    pub best_move: Option<Move>,
    /// Minimax score, positive favouring the Opponent.
    pub score: i32,
    /// Tree nodes visited, root included.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u8,
}

/// Fixed-depth minimax searcher.
///
/// The Opponent maximizes the evaluation and the Player minimizes it.
/// The board is searched in place; every move tried is taken back before
/// [`search`](Searcher::search) returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u8,
}

impl Searcher {
    /// Create a searcher that looks `depth` plies ahead.
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Return the configured depth.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search the position with `side` to move.
    pub fn search(&self, board: &mut Board, side: Side) -> SearchResult {
        let mut ctx = SearchContext::default();
        let plies_before = board.history().len();

        let score = minimax(board, side, self.depth, 0, &mut ctx);

        debug_assert_eq!(
            board.history().len(),
            plies_before,
            "search left moves on the board"
        );
        debug!(
            %side,
            depth = self.depth,
            score,
            nodes = ctx.nodes,
            best = ?ctx.root_best,
            "search complete"
        );

        SearchResult {
            best_move: ctx.root_best,
            score,
            nodes: ctx.nodes,
            depth: self.depth,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DEPTH)
    }
}

/// Pick the Opponent's move, searching `depth` plies.
///
/// Returns `None` when the position is already over; the caller must not
/// apply anything in that case.
pub fn choose_move(board: &mut Board, depth: u8) -> Option<Move> {
    Searcher::new(depth).search(board, Side::Opponent).best_move
}
