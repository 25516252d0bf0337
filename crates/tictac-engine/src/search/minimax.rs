//! Plain minimax without pruning.

use tictac_core::{Board, Move, Side};

use crate::evaluate;

/// Search state threaded through minimax calls.
#[derive(Debug, Default)]
pub(super) struct SearchContext {
    /// Total nodes visited.
    pub nodes: u64,
    /// Best move found at the root.
    pub root_best: Option<Move>,
}

/// Minimax score of `board` with `side` to move, `depth` plies deep.
///
/// The Opponent keeps the strictly greatest child score and the Player
/// the strictly smallest, so ties go to the lowest cell index. The root
/// frame (`ply == 0`) records its choice in `ctx.root_best`.
pub(super) fn minimax(
    board: &mut Board,
    side: Side,
    depth: u8,
    ply: u8,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    let moves = board.legal_moves(side);
    if depth == 0 || moves.is_empty() {
        return evaluate(board);
    }

    let maximizing = side == Side::Opponent;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        board.apply_move(mv.mark, mv.index);
        let score = minimax(board, !side, depth - 1, ply + 1, ctx);
        board.undo_last_move();

        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(mv);
        }
    }

    if ply == 0 {
        ctx.root_best = best_move;
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::{SearchContext, minimax};
    use tictac_core::{Board, Cell, Move, Side};

    #[test]
    fn player_minimizes_at_root() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        let mut ctx = SearchContext::default();
        let score = minimax(&mut board, Side::Player, 2, 0, &mut ctx);
        assert_eq!(ctx.root_best, Some(Move::new(Cell::Player, 2)));
        assert_eq!(score, 91);
        assert_eq!(ctx.nodes, 50);
        assert_eq!(board, before);
    }

    #[test]
    fn inner_frames_do_not_touch_root_best() {
        let mut board = Board::new();
        let mut ctx = SearchContext::default();
        minimax(&mut board, Side::Opponent, 1, 1, &mut ctx);
        assert_eq!(ctx.root_best, None);
        assert_eq!(ctx.nodes, 10);
    }
}
