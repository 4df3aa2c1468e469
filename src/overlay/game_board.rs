//! Generic per-cell value storage layered over a square board
//!
//! A [`GameBoard`] keeps one optional value for every cell of the board it
//! wraps. The board itself is only borrowed through [`Borrow`], so an owned
//! board, a reference or an `Arc` can all back an overlay, and every topology
//! query is forwarded to it unchanged.

use ndarray::Array2;
use std::borrow::Borrow;

use crate::io::error::{BoardError, Result};
use crate::overlay::cell_set::CellSet;
use crate::spatial::board::{Board, SquareBoard};
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;

/// Square board with an optional value of type `T` on every cell
///
/// Values live in a `width` x `width` array addressed by the cell's
/// row-major position, so the set of cells holding a slot never changes
/// after construction; only the values do. Every slot starts out empty.
///
/// Queries that scan the board visit cells in row-major order. [`find`]
/// therefore returns the first match in that order, although callers should
/// treat the choice among several matches as arbitrary.
///
/// [`find`]: GameBoard::find
#[derive(Debug, Clone)]
pub struct GameBoard<T, B = SquareBoard> {
    board: B,
    values: Array2<Option<T>>,
}

impl<T, B> GameBoard<T, B>
where
    B: Borrow<SquareBoard>,
{
    /// Wrap `board` with every cell's value set to `None`
    pub fn new(board: B) -> Self {
        let square: &SquareBoard = board.borrow();
        let width = square.width();
        let values = Array2::from_shape_fn((width, width), |_| None);
        Self { board, values }
    }

    /// The wrapped board
    pub fn board(&self) -> &SquareBoard {
        self.board.borrow()
    }

    /// Current value at `cell`
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCell`] if `cell` is not on the wrapped board
    pub fn get(&self, cell: Cell) -> Result<Option<&T>> {
        let position = self.position(cell)?;
        Ok(self.values.get(position).and_then(Option::as_ref))
    }

    /// Overwrite the value at `cell`, leaving every other cell untouched
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCell`] if `cell` is not on the wrapped board
    pub fn set(&mut self, cell: Cell, value: Option<T>) -> Result<()> {
        let position = self.position(cell)?;
        let width = self.board().width();
        let slot = self
            .values
            .get_mut(position)
            .ok_or(BoardError::UnknownCell { cell, width })?;
        *slot = value;
        Ok(())
    }

    /// Reset every cell to `None`
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|slot| *slot = None);
    }

    /// Every cell paired with its current value, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<&T>)> + '_ {
        self.board()
            .all_cells()
            .iter()
            .copied()
            .zip(self.values.iter().map(Option::as_ref))
    }

    /// Cells whose value satisfies `predicate`
    pub fn filter<P>(&self, mut predicate: P) -> CellSet
    where
        P: FnMut(Option<&T>) -> bool,
    {
        let mut matches = CellSet::new(self.board().width());
        for (index, value) in self.values.iter().enumerate() {
            if predicate(value.as_ref()) {
                matches.insert_index(index);
            }
        }
        matches
    }

    /// Some cell whose value satisfies `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<Cell>
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.iter()
            .find(|&(_, value)| predicate(value))
            .map(|(cell, _)| cell)
    }

    /// Whether at least one cell's value satisfies `predicate`
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.values.iter().any(|value| predicate(value.as_ref()))
    }

    /// Whether every cell's value satisfies `predicate`
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.values.iter().all(|value| predicate(value.as_ref()))
    }

    /// Number of cells whose value satisfies `predicate`
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Option<&T>) -> bool,
    {
        self.values
            .iter()
            .map(Option::as_ref)
            .filter(|&value| predicate(value))
            .count()
    }

    /// Array position backing `cell`
    fn position(&self, cell: Cell) -> Result<[usize; 2]> {
        let board = self.board();
        let width = board.width();
        board
            .index_of(cell)
            .map(|index| [index / width, index % width])
            .ok_or(BoardError::UnknownCell { cell, width })
    }
}

impl<T, B> Board for GameBoard<T, B>
where
    B: Borrow<SquareBoard>,
{
    fn width(&self) -> usize {
        self.board().width()
    }

    fn cell_or_none(&self, i: i32, j: i32) -> Option<Cell> {
        self.board().cell_or_none(i, j)
    }

    fn cell(&self, i: i32, j: i32) -> Result<Cell> {
        self.board().cell(i, j)
    }

    fn all_cells(&self) -> &[Cell] {
        self.board().all_cells()
    }

    fn row<R>(&self, i: i32, j_range: R) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>,
    {
        self.board().row(i, j_range)
    }

    fn column<R>(&self, i_range: R, j: i32) -> Vec<Cell>
    where
        R: IntoIterator<Item = i32>,
    {
        self.board().column(i_range, j)
    }

    fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.board().neighbour(cell, direction)
    }
}

/// Create a board of the given width with an empty overlay on top
///
/// # Errors
///
/// Returns [`BoardError::InvalidWidth`] for widths outside `1..=MAX_BOARD_WIDTH`
pub fn create_game_board<T>(width: i32) -> Result<GameBoard<T>> {
    SquareBoard::new(width).map(GameBoard::new)
}
