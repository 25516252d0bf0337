//! Console errors.

use tictac_engine::ConfigError;

/// Errors that can occur while reading or running console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command was given without its required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A cell reference is not an index in 0..9 or a column/row pair.
    #[error("invalid cell: {value}")]
    InvalidCell {
        /// The text that failed to parse.
        value: String,
    },

    /// The depth value could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// The command word is not recognized.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized word.
        name: String,
    },

    /// The requested configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
