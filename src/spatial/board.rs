//! Square board topology with eager cell materialization
//!
//! A board of width `n` creates all `n * n` cells once, in row-major order,
//! and answers every later query from that fixed set. Lookups use index
//! arithmetic instead of scanning, and out-of-range positions are reported as
//! `None` so that board edges never surface as errors.

use num_traits::ToPrimitive;

use crate::io::configuration::MAX_BOARD_WIDTH;
use crate::io::error::{BoardError, Result, invalid_width};
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;

/// Topology queries shared by [`SquareBoard`] and everything wrapping one
///
/// Indices are 1-based. Range arguments accept any sequence of indices, so
/// `1..=n`, `(1..=n).rev()` and `(1..=n).step_by(2)` all work; entries that
/// fall off the board are skipped.
pub trait Board {
    /// Number of rows (and columns)
    fn width(&self) -> usize;

    /// Cell at `(i, j)`, or `None` when either index is outside `1..=width`
    fn cell_or_none(&self, i: i32, j: i32) -> Option<Cell>;

    /// Cell at `(i, j)` for indices the caller knows to be valid
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCell`] when `cell_or_none` would return `None`
    fn cell(&self, i: i32, j: i32) -> Result<Cell>;

    /// Every cell in row-major order
    fn all_cells(&self) -> &[Cell];

    /// Cells of row `i` at the given columns, in the order given
    fn row<R>(&self, i: i32, j_range: R) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>;

    /// Cells of column `j` at the given rows, in the order given
    fn column<R>(&self, i_range: R, j: i32) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>;

    /// Adjacent cell one step in `direction`, or `None` at the board edge
    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell>;

    /// Whether `cell` lies on this board
    fn contains(&self, cell: Cell) -> bool {
        row_major_index(self.width(), cell.i(), cell.j()).is_some()
    }
}

/// Immutable `width` x `width` board owning all of its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareBoard {
    width: usize,
    cells: Vec<Cell>,
}

impl SquareBoard {
    /// Create a board with every cell materialized
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidWidth`] if `width` is not positive or
    /// exceeds [`MAX_BOARD_WIDTH`]
    pub fn new(width: i32) -> Result<Self> {
        let Some(size) = width.to_usize().filter(|&size| size > 0) else {
            return Err(invalid_width(width, "width must be positive"));
        };
        if size > MAX_BOARD_WIDTH {
            return Err(invalid_width(width, "width exceeds the maximum board width"));
        }

        let cells = (1..=width)
            .flat_map(|i| (1..=width).map(move |j| Cell::new(i, j)))
            .collect();

        Ok(Self { width: size, cells })
    }

    /// Row-major storage index of `cell`, or `None` if it is not on this board
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        row_major_index(self.width, cell.i(), cell.j())
    }
}

impl Board for SquareBoard {
    fn width(&self) -> usize {
        self.width
    }

    fn cell_or_none(&self, i: i32, j: i32) -> Option<Cell> {
        row_major_index(self.width, i, j)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    fn cell(&self, i: i32, j: i32) -> Result<Cell> {
        self.cell_or_none(i, j).ok_or(BoardError::InvalidCell {
            i,
            j,
            width: self.width,
        })
    }

    fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row<R>(&self, i: i32, j_range: R) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>,
    {
        j_range
            .into_iter()
            .filter_map(|j| self.cell_or_none(i, j))
            .collect()
    }

    fn column<R>(&self, i_range: R, j: i32) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>,
    {
        i_range
            .into_iter()
            .filter_map(|i| self.cell_or_none(i, j))
            .collect()
    }

    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (di, dj) = direction.offset();
        self.cell_or_none(cell.i().checked_add(di)?, cell.j().checked_add(dj)?)
    }
}

/// Create a square board of the given width
///
/// # Errors
///
/// Returns [`BoardError::InvalidWidth`] for widths outside `1..=MAX_BOARD_WIDTH`
pub fn create_square_board(width: i32) -> Result<SquareBoard> {
    SquareBoard::new(width)
}

/// Row-major index of the 1-based position `(i, j)` on a board of `width`
pub(crate) fn row_major_index(width: usize, i: i32, j: i32) -> Option<usize> {
    let row = i.checked_sub(1)?.to_usize()?;
    let col = j.checked_sub(1)?.to_usize()?;
    (row < width && col < width).then(|| row * width + col)
}

/// Inverse of [`row_major_index`] for an index known to be in range
pub(crate) const fn cell_at(width: usize, index: usize) -> Cell {
    Cell::new((index / width + 1) as i32, (index % width + 1) as i32)
}
