//! Minimax search with optional depth limit.
//!
//! The search works on a private copy of the caller's board. Every
//! hypothetical placement is undone with [`Board::clear`] before the next
//! sibling is tried, so the copy is back to its starting state when the
//! search returns and the caller's board is never touched.

use crate::moves::legal_moves;
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of an immediate win. Wins found `d` plies deeper score `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// How many plies below the candidate move the search may look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DepthLimit {
    /// Search to terminal states. The tree is at most nine plies deep.
    #[default]
    Unlimited,
    /// Stop at this depth and score unresolved positions as 0.
    Plies(u32),
}

impl DepthLimit {
    /// Returns true once `depth` has reached the limit.
    pub fn reached(self, depth: u32) -> bool {
        match self {
            DepthLimit::Unlimited => false,
            DepthLimit::Plies(limit) => depth >= limit,
        }
    }
}

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best cell for the searching player, `None` if there is nothing to play.
    pub best_move: Option<usize>,
    /// Minimax score of `best_move` from the searching player's perspective.
    pub score: i32,
    /// Positions evaluated below the root.
    pub nodes: u64,
}

/// Selects the best move for `player`, or `None` if no move can be made.
///
/// Ties go to the lowest index.
pub fn select_move(board: &Board, player: Player, depth_limit: DepthLimit) -> Option<usize> {
    search(board, player, depth_limit).best_move
}

/// Runs minimax for `player` and reports the chosen move with its score.
///
/// Terminal positions score `WIN_SCORE - depth` for a win by `player`,
/// `depth - WIN_SCORE` for a loss and 0 for a draw. A position at the depth
/// limit that is not terminal scores 0. Candidate moves are scored at depth 0.
///
/// A board that is already won or drawn yields no move.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn search(board: &Board, player: Player, depth_limit: DepthLimit) -> SearchOutcome {
    let root = evaluate(board);
    if root.is_terminal() {
        debug!(?root, "Board is terminal, nothing to search");
        return SearchOutcome {
            best_move: None,
            score: terminal_score(root, player, 0).unwrap_or(0),
            nodes: 0,
        };
    }

    let mut scratch = *board;
    let mut nodes = 0;
    let mut best: Option<(usize, i32)> = None;

    for index in legal_moves(&scratch) {
        if scratch.place(index, player).is_err() {
            continue;
        }
        let score = minimax(
            &mut scratch,
            player,
            player.opponent(),
            0,
            depth_limit,
            &mut nodes,
        );
        scratch.clear(index);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    debug_assert_eq!(&scratch, board, "search left a placement behind");

    let outcome = SearchOutcome {
        best_move: best.map(|(index, _)| index),
        score: best.map_or(0, |(_, score)| score),
        nodes,
    };
    debug!(
        best_move = ?outcome.best_move,
        score = outcome.score,
        nodes = outcome.nodes,
        "Search complete"
    );
    outcome
}

/// Scores a terminal outcome for `me`, or `None` if the game goes on.
fn terminal_score(outcome: Outcome, me: Player, depth: u32) -> Option<i32> {
    let depth = depth as i32;
    match outcome {
        Outcome::Win(winner) if winner == me => Some(WIN_SCORE - depth),
        Outcome::Win(_) => Some(depth - WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

fn minimax(
    board: &mut Board,
    me: Player,
    to_move: Player,
    depth: u32,
    depth_limit: DepthLimit,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if let Some(score) = terminal_score(evaluate(board), me, depth) {
        return score;
    }
    if depth_limit.reached(depth) {
        return 0;
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in legal_moves(board) {
        if board.place(index, to_move).is_err() {
            continue;
        }
        let score = minimax(board, me, to_move.opponent(), depth + 1, depth_limit, nodes);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
