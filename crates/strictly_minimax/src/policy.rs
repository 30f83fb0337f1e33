//! Move selection policies for the computer player.

use crate::moves::legal_moves;
use crate::search::{DepthLimit, select_move};
use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search depth used by [`Difficulty::Medium`].
pub const MEDIUM_DEPTH_LIMIT: u32 = 2;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Minimax limited to [`MEDIUM_DEPTH_LIMIT`] plies.
    Medium,
    /// Exhaustive minimax.
    #[default]
    Hard,
}

impl Difficulty {
    /// Search depth for the minimax tiers, `None` for the random tier.
    pub fn depth_limit(self) -> Option<DepthLimit> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(DepthLimit::Plies(MEDIUM_DEPTH_LIMIT)),
            Difficulty::Hard => Some(DepthLimit::Unlimited),
        }
    }

    /// Builds the selector for this tier. The random tier draws from `rng`.
    pub fn selector<'a, R: Rng>(self, rng: &'a mut R) -> Box<dyn MoveSelector + 'a> {
        match self.depth_limit() {
            None => Box::new(RandomMove::new(rng)),
            Some(depth_limit) => Box::new(MinimaxMove::new(depth_limit)),
        }
    }
}

/// Something that picks the computer's next cell.
pub trait MoveSelector {
    /// Picks a cell for `player`, or `None` if the board has no legal move.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Picks uniformly among legal moves, bypassing search.
#[derive(Debug)]
pub struct RandomMove<R> {
    rng: R,
}

impl<R: Rng> RandomMove<R> {
    /// Creates a random selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomMove<R> {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let choice = legal_moves(board).choose(&mut self.rng).copied();
        debug!(?choice, "Random move chosen");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Minimax selector with a fixed depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxMove {
    depth_limit: DepthLimit,
}

impl MinimaxMove {
    /// Creates a minimax selector.
    pub fn new(depth_limit: DepthLimit) -> Self {
        Self { depth_limit }
    }

    /// Returns the configured depth limit.
    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }
}

impl MoveSelector for MinimaxMove {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        select_move(board, player, self.depth_limit)
    }

    fn name(&self) -> &'static str {
        match self.depth_limit {
            DepthLimit::Unlimited => "minimax",
            DepthLimit::Plies(_) => "depth-limited minimax",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parses_case_insensitive() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_difficulty_depth_limits() {
        assert_eq!(Difficulty::Easy.depth_limit(), None);
        assert_eq!(Difficulty::Medium.depth_limit(), Some(DepthLimit::Plies(2)));
        assert_eq!(Difficulty::Hard.depth_limit(), Some(DepthLimit::Unlimited));
    }

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::parse(["X", "", "O", "", "X", "", "O", "", "X"]).unwrap();
        let mut selector = RandomMove::new(StdRng::seed_from_u64(7));
        let legal = legal_moves(&board);
        for _ in 0..50 {
            let choice = selector.select_move(&board, Player::O).unwrap();
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn test_random_move_covers_all_cells() {
        let board = Board::new();
        let mut selector = RandomMove::new(StdRng::seed_from_u64(42));
        let seen: HashSet<usize> = (0..500)
            .filter_map(|_| selector.select_move(&board, Player::X))
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_random_move_on_full_board() {
        let board = Board::parse(["X", "O", "X", "X", "O", "O", "O", "X", "X"]).unwrap();
        let mut selector = RandomMove::new(StdRng::seed_from_u64(1));
        assert_eq!(selector.select_move(&board, Player::X), None);
    }

    #[test]
    fn test_medium_misses_deep_fork() {
        // X holds a corner. Answering in another corner loses to a fork three
        // plies later, which a two-ply horizon cannot see; full search takes
        // the center.
        let board = Board::parse(["", "", "", "", "", "", "X", "", ""]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let medium = Difficulty::Medium.selector(&mut rng).select_move(&board, Player::O);
        let hard = Difficulty::Hard.selector(&mut rng).select_move(&board, Player::O);
        assert_eq!(medium, Some(0));
        assert_eq!(hard, Some(4));
    }
}
