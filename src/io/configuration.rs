//! Crate-wide constants

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board width
///
/// A board materializes `width * width` cells up front, so the limit caps
/// eager allocation at one hundred million cells.
pub const MAX_BOARD_WIDTH: usize = 10_000;
