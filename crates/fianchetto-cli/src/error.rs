//! Console session errors.

/// Errors that can occur while reading and parsing console input.
///
/// Rejected chess moves are not errors — the engine reports those as an
/// unchanged state and the session prints a plain message.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command that needs a square was given none.
    #[error("expected a square in algebraic notation (a1-h8)")]
    MissingSquare,

    /// A square argument was not valid algebraic notation.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The rejected token.
        square: String,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
