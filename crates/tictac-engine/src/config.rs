//! Game configuration.

use crate::error::ConfigError;

/// Search depth used when nothing else is configured, in plies.
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest useful search: one ply per cell.
pub const MAX_DEPTH: u8 = 9;

/// Knobs adjustable from the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Search depth in plies for the computer's replies and hints.
    pub depth: u8,
}

impl GameConfig {
    /// Create a config with the given search depth.
    pub fn with_depth(depth: u8) -> Result<GameConfig, ConfigError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(ConfigError::DepthOutOfRange {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(GameConfig { depth })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}
