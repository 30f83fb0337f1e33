//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are separated from board
//! storage so the search and the controller share one evaluator.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board. For an illegal board
/// with two completed lines, the first line in [`WIN_LINES`] order decides.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
