//! Error types for reading a problem instance.
//!
//! Unreachability of the goal is not an error; see [`crate::resolver::solve`].

use thiserror::Error;

/// Input error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The input ended before the named field was read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token could not be parsed as the expected integer.
    #[error("invalid {field}: {token:?}")]
    InvalidToken {
        field: &'static str,
        token: String,
    },

    /// A node id outside `[1, n]`.
    #[error("node id {id} out of range [1, {n}]")]
    NodeOutOfRange { id: usize, n: usize },

    /// A penalty above the 10-bit range.
    #[error("penalty {0} out of range [0, {max}]", max = crate::graph::MAX_PENALTY)]
    PenaltyOutOfRange(u32),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for input handling.
pub type Result<T> = std::result::Result<T, Error>;
