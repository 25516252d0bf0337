//! Engine configuration errors.

/// Errors from building a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The requested search depth is outside `1..=max`.
    #[error("search depth {depth} out of range 1..={max}")]
    DepthOutOfRange {
        /// The rejected depth.
        depth: u8,
        /// Largest accepted depth.
        max: u8,
    },
}
