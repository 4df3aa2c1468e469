//! Value overlay
//!
//! Stores an optional value per board cell and answers predicate queries
//! over those values.

/// Row-major cell sets returned by overlay queries
pub mod cell_set;
/// Board-wrapping value storage
pub mod game_board;

pub use cell_set::CellSet;
pub use game_board::GameBoard;
