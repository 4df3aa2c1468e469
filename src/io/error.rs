//! Error types for board construction and cell access

use std::fmt;

use crate::spatial::cell::Cell;

/// Main error type for all board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board width outside the accepted range
    InvalidWidth {
        /// Width that was requested
        width: i64,
        /// Explanation of why the width was rejected
        reason: &'static str,
    },

    /// Strict lookup with indices that do not name a cell of the board
    InvalidCell {
        /// Requested row
        i: i32,
        /// Requested column
        j: i32,
        /// Width of the board the lookup ran against
        width: usize,
    },

    /// Cell handed to an overlay that was never produced by its board
    ///
    /// Only reachable with a cell built through [`Cell::new`] outside the
    /// board's bounds.
    UnknownCell {
        /// The offending cell
        cell: Cell,
        /// Width of the overlay's board
        width: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width, reason } => {
                write!(f, "Invalid board width {width}: {reason}")
            }
            Self::InvalidCell { i, j, width } => {
                write!(f, "No cell at ({i}, {j}) on a board of width {width}")
            }
            Self::UnknownCell { cell, width } => {
                write!(f, "Cell {cell} does not belong to this board (width {width})")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Create an invalid width error
pub fn invalid_width(width: impl Into<i64>, reason: &'static str) -> BoardError {
    BoardError::InvalidWidth {
        width: width.into(),
        reason,
    }
}
