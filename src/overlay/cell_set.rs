use bitvec::prelude::*;
use std::fmt;

use crate::spatial::board::{cell_at, row_major_index};
use crate::spatial::cell::Cell;

/// Fixed-size set of cells from one board
///
/// Stores one bit per board cell at the cell's row-major index, so
/// membership testing is O(1) and iteration always runs in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    bits: BitVec,
    width: usize,
}

impl CellSet {
    /// Create an empty set sized for a board of `width`
    pub(crate) fn new(width: usize) -> Self {
        Self {
            bits: bitvec![0; width * width],
            width,
        }
    }

    /// Mark the cell stored at row-major `index` as present
    pub(crate) fn insert_index(&mut self, index: usize) {
        debug_assert!(index < self.bits.len(), "cell index {index} outside board");
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: Cell) -> bool {
        row_major_index(self.width, cell.i(), cell.j())
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter_ones()
            .map(|index| cell_at(self.width, index))
    }

    /// Extract all cells as a vector in row-major order
    pub fn to_vec(&self) -> Vec<Cell> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Box<dyn Iterator<Item = Cell> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet({} cells: [", self.len())?;
        for (position, cell) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "])")
    }
}
