//! Evaluation, minimax search, and game control for tictac.

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use config::{DEFAULT_DEPTH, GameConfig, MAX_DEPTH};
pub use error::ConfigError;
pub use eval::{evaluate, line_score};
pub use game::{Game, Turn};
pub use search::{SearchResult, Searcher, choose_move};
