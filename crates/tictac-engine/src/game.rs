//! Game controller: the operations a front-end drives.

use tictac_core::{Board, Cell, Move, Outcome, Side};
use tracing::debug;

use crate::config::GameConfig;
use crate::eval::evaluate;
use crate::search::Searcher;

/// Moves applied by one [`Game::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Turn {
    /// The human move, or `None` if the input was ignored.
    pub player: Option<Move>,
    /// The computer's answer, or `None` if the game ended first.
    pub reply: Option<Move>,
}

/// A human-versus-computer game on one board.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    config: GameConfig,
}

impl Game {
    /// Start an empty game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
        }
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the active configuration.
    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Replace the configuration. Takes effect from the next search.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Return the current outcome.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Static evaluation of the current position.
    pub fn evaluation(&self) -> i32 {
        evaluate(&self.board)
    }

    /// Clear the board for a new game.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Play the human move at `index`, then let the computer answer.
    ///
    /// Ignored when the game is over, the cell is not vacant, or the
    /// computer is to move.
    pub fn play(&mut self, index: usize) -> Turn {
        if self.board.is_terminal()
            || !self.board.is_vacant(index)
            || !self.may_move(Side::Player)
        {
            debug!(index, "human move ignored");
            return Turn::default();
        }

        self.board.apply_move(Cell::Player, index);
        let reply = self.reply();

        Turn {
            player: Some(Move::new(Cell::Player, index)),
            reply,
        }
    }

    /// Compute and apply the computer's move.
    ///
    /// `None` if the game is over or the human is to move.
    pub fn reply(&mut self) -> Option<Move> {
        if !self.may_move(Side::Opponent) {
            debug!("computer move requested out of turn");
            return None;
        }
        let result = self.searcher().search(&mut self.board, Side::Opponent);
        let mv = result.best_move?;
        self.board.apply_move(mv.mark, mv.index);
        Some(mv)
    }

    /// Suggest a move for the human without playing it.
    ///
    /// `None` if the game is over or the computer is to move.
    pub fn hint(&mut self) -> Option<Move> {
        if !self.may_move(Side::Player) {
            return None;
        }
        self.searcher().search(&mut self.board, Side::Player).best_move
    }

    /// Take back the last computer move and the human move before it.
    ///
    /// Returns the number of moves removed (0 to 2).
    pub fn undo(&mut self) -> usize {
        (0..2)
            .filter_map(|_| self.board.undo_last_move())
            .count()
    }

    /// Either side may open; afterwards the sides alternate.
    fn may_move(&self, side: Side) -> bool {
        self.board
            .history()
            .last()
            .and_then(|mv| Side::owning(mv.mark))
            .is_none_or(|last| last != side)
    }

    fn searcher(&self) -> Searcher {
        Searcher::new(self.config.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, Turn};
    use crate::config::GameConfig;
    use tictac_core::{Cell, Move, Outcome};

    /// X takes the top row while O sits on 3 and 4.
    const HUMAN_WIN: [(Cell, usize); 5] = [
        (Cell::Player, 0),
        (Cell::Opponent, 3),
        (Cell::Player, 1),
        (Cell::Opponent, 4),
        (Cell::Player, 2),
    ];

    #[test]
    fn play_applies_move_and_reply() {
        let mut game = Game::default();
        let turn = game.play(0);
        assert_eq!(turn.player, Some(Move::new(Cell::Player, 0)));
        assert_eq!(turn.reply, Some(Move::new(Cell::Opponent, 4)));
        assert_eq!(game.board().history().len(), 2);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn occupied_or_out_of_range_is_ignored() {
        let mut game = Game::default();
        game.play(0);
        let before = game.board().clone();
        assert_eq!(game.play(0), Turn::default());
        assert_eq!(game.play(4), Turn::default());
        assert_eq!(game.play(9), Turn::default());
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn undo_removes_both_half_moves() {
        let mut game = Game::default();
        game.play(0);
        game.play(8);
        assert_eq!(game.undo(), 2);
        assert_eq!(game.board().to_string(), "X../.O./...");
        assert_eq!(game.undo(), 2);
        assert_eq!(game.undo(), 0);
        assert!(game.board().history().is_empty());
    }

    #[test]
    fn hint_leaves_board_alone() {
        let mut game = Game::default();
        game.play(0);
        let before = game.board().clone();
        assert_eq!(game.hint(), Some(Move::new(Cell::Player, 2)));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn reply_waits_for_the_human() {
        let mut game = Game::default();
        assert_eq!(game.reply(), Some(Move::new(Cell::Opponent, 4)));
        let before = game.board().clone();
        assert_eq!(game.reply(), None);
        assert_eq!(game.reply(), None);
        assert_eq!(game.board(), &before);

        let turn = game.play(0);
        assert_eq!(turn.player, Some(Move::new(Cell::Player, 0)));
        assert_eq!(game.reply(), None);
    }

    #[test]
    fn hint_only_on_human_turn() {
        let mut game = Game::default();
        assert!(game.hint().is_some());
        game.reply();
        assert!(game.hint().is_some());

        // Undo after a human win leaves the computer to move.
        let mut game = Game::default();
        for (mark, index) in HUMAN_WIN {
            game.board.apply_move(mark, index);
        }
        assert_eq!(game.outcome(), Outcome::PlayerWins);
        assert_eq!(game.undo(), 2);
        assert_eq!(game.hint(), None);
        assert_eq!(game.play(2), Turn::default());
        assert!(game.reply().is_some());
    }

    #[test]
    fn reply_on_finished_game_is_none() {
        let mut game = Game::default();
        for (mark, index) in HUMAN_WIN {
            game.board.apply_move(mark, index);
        }
        let before = game.board().clone();
        assert_eq!(game.reply(), None);
        assert_eq!(game.board(), &before);

        let mut game = Game::default();
        // Ends on XOX/XOO/OXX with the human's last mark.
        for (ply, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            let mark = if ply % 2 == 0 { Cell::Player } else { Cell::Opponent };
            game.board.apply_move(mark, index);
        }
        let before = game.board().clone();
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.reply(), None);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn reset_starts_over() {
        let mut game = Game::default();
        game.play(4);
        game.reset();
        assert!(game.board().history().is_empty());
        assert_eq!(game.evaluation(), 8);
    }

    #[test]
    fn config_changes_search_depth() {
        let mut game = Game::new(GameConfig::with_depth(1).unwrap());
        assert_eq!(game.config().depth, 1);
        game.set_config(GameConfig::default());
        assert_eq!(game.config().depth, 2);
    }
}
