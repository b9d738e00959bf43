//! Board state and knight move generation
//!
//! This module contains the board-level building blocks shared by every solver:
//! - Signed board coordinates
//! - The occupancy grid of move numbers
//! - The fixed knight move offsets and legality checks

/// Occupancy grid of move numbers and tour validation
pub mod grid;
/// Knight move offsets and neighbor generation
pub mod moves;
/// Signed board coordinates
pub mod position;

pub use grid::Board;
pub use position::Position;
