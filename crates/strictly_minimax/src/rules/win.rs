//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WIN_LINES`] holding three
/// equal marks, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[a] == cells[b] && cells[a] == cells[c] => Some(player),
        _ => None,
    })
}
