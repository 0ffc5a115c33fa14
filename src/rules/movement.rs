//! Single-step movement.
//!
//! Movement is always simulated one cell at a time: lap detection and the
//! diagonal cursor both depend on every intermediate cell, so a turn's
//! destination is never computed with a single modulo.

use crate::board::{Board, CellIndex};
use crate::core::PathState;

/// Advance one cell from `position` along `path`.
///
/// - Outer: one cell counter-clockwise, wrapping 0 → 19.
/// - Diagonal: the cursor moves forward. Stepping past the final cell
///   snaps to the path's exit and switches back to the outer ring.
#[must_use]
pub fn step(board: &Board, position: CellIndex, path: PathState) -> (CellIndex, PathState) {
    match path {
        PathState::Outer => (board.step_outer(position), PathState::Outer),
        PathState::Diagonal { branch, cursor } => {
            let Some(route) = board.diagonal_path_for(branch) else {
                return (board.step_outer(position), PathState::Outer);
            };
            let cursor = cursor.saturating_add(1);
            match route.cell(cursor) {
                Some(cell) => (cell, PathState::Diagonal { branch, cursor }),
                None => (route.exit(), PathState::Outer),
            }
        }
    }
}

/// Put a diagonal walk that stopped on its final cell back on the ring.
#[must_use]
pub fn settle(board: &Board, path: PathState) -> PathState {
    match path {
        PathState::Diagonal { branch, cursor } => match board.diagonal_path_for(branch) {
            Some(route) if cursor < route.last_cursor() => path,
            _ => PathState::Outer,
        },
        PathState::Outer => PathState::Outer,
    }
}
