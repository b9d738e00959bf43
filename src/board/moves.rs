//! Knight move offsets and neighbor generation
//!
//! Everything here is pure: neighbor generation never consults a board, and the only
//! board-aware helper, [`legal_moves`], only reads it.

use crate::board::{Board, Position};

/// The eight knight displacements in the order the solvers try them
///
/// The order is part of the backtracking contract: the first closed tour reachable
/// under this order is the one reported.
pub const KNIGHT_MOVES: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Knight destinations from `position` in [`KNIGHT_MOVES`] order
///
/// Destinations are not checked against any board, so some may lie off it. Only
/// offsets that would overflow the coordinate range are skipped.
pub fn neighbors(position: Position) -> impl Iterator<Item = Position> {
    KNIGHT_MOVES
        .into_iter()
        .filter_map(move |(dx, dy)| position.offset(dx, dy))
}

/// Neighbors of `position` that are on the board and unvisited, in offset order
pub fn legal_moves(board: &Board, position: Position) -> Vec<Position> {
    neighbors(position)
        .filter(|&next| board.is_legal(next))
        .collect()
}

/// Check whether `from` and `to` are exactly one knight move apart
pub fn is_knight_move(from: Position, to: Position) -> bool {
    neighbors(from).any(|next| next == to)
}

/// Check whether a tour ending on `last` can jump back to `start`
pub fn closes_to(last: Position, start: Position) -> bool {
    is_knight_move(last, start)
}
