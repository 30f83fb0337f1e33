//! Legal move generation.

use crate::types::{Board, CELL_COUNT};

/// Returns every empty cell index in ascending order.
///
/// An empty result means the board is full.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&i| board.is_empty(i)).collect()
}
