//! Immutable 1-based board coordinates

use std::fmt;

/// A single (row, column) position on a square board
///
/// Rows and columns count from 1. Cells are plain values: they carry no
/// reference to the board they came from, so equality, hashing and ordering
/// are all derived from the two indices. Ordering is row-major, matching the
/// enumeration order of [`crate::SquareBoard::all_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    i: i32,
    j: i32,
}

impl Cell {
    /// Create a cell from raw indices
    ///
    /// No bounds are checked here. Prefer [`crate::Board::cell_or_none`] when
    /// a cell guaranteed to belong to a board is needed.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Row index, counted from 1
    pub const fn i(&self) -> i32 {
        self.i
    }

    /// Column index, counted from 1
    pub const fn j(&self) -> i32 {
        self.j
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
