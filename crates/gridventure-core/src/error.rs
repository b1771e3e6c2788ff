//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A cell number outside the board was passed to a board operation.
    #[error("cell {cell} is outside the board [1, {cell_count}]")]
    CellOutOfRange {
        /// The offending cell number.
        cell: u32,
        /// Number of cells on the board.
        cell_count: u32,
    },

    /// The board configuration failed validation.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// The turn timing configuration failed validation.
    #[error("invalid timings: {0}")]
    InvalidTimings(String),

    /// An infrastructure error (I/O, parsing, poisoned locks).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
