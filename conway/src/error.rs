//! Errors raised by the automaton engine.

use thiserror::Error;

/// Errors that can occur while building grids or moving through history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input rows do not all have the same length.
    #[error("invalid grid: row {row} has {found} cells, expected {expected}")]
    InvalidGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// History index is more than one past the last computed generation.
    #[error("invalid history index {index}: only {len} generations computed")]
    InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
