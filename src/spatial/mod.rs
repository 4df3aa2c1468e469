//! Board topology
//!
//! This module contains the coordinate layer:
//! - Cell coordinates
//! - Cardinal directions
//! - The square board and the topology trait it implements

/// Square board construction and topology queries
pub mod board;
/// Cell coordinate value type
pub mod cell;
/// Cardinal directions
pub mod direction;

pub use board::{Board, SquareBoard};
pub use cell::Cell;
pub use direction::Direction;
