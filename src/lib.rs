//! Fixed-size square boards with a generic value overlay
//!
//! The topology layer enumerates the cells of an `n` x `n` board and resolves
//! row, column and neighbour queries along the four cardinal directions. The
//! overlay layer wraps a board and associates an optional value with each
//! cell, supporting predicate-based queries over those values.

#![forbid(unsafe_code)]

/// Error handling and crate constants
pub mod io;
/// Per-cell value storage over a board
pub mod overlay;
/// Cells, directions and square board topology
pub mod spatial;

pub use io::error::{BoardError, Result};
pub use overlay::game_board::create_game_board;
pub use overlay::{CellSet, GameBoard};
pub use spatial::board::create_square_board;
pub use spatial::{Board, Cell, Direction, SquareBoard};
