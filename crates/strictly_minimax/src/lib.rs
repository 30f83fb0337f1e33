//! Strictly Minimax - tic-tac-toe against a computer opponent
//!
//! An embeddable engine: board representation, outcome evaluation and a
//! minimax search whose depth sets the opponent's strength. Rendering and
//! input handling belong to the caller, which plugs in through
//! [`GameObserver`].
//!
//! # Architecture
//!
//! - **Board**: nine cells and validity queries
//! - **Rules**: win/draw classification of a board
//! - **Moves**: legal move generation
//! - **Search**: minimax with an optional depth limit
//! - **Policy**: difficulty tiers (random, shallow search, full search)
//! - **Controller**: the authoritative game and its turn state machine
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Difficulty, GameConfig, GameController, Phase, Starter};
//!
//! let config = GameConfig::new(Starter::Human, Difficulty::Hard);
//! let mut game = GameController::new(config);
//!
//! // Human takes the center, computer replies.
//! assert_eq!(game.apply_human_move(4)?, Phase::AwaitingComputerMove);
//! let reply = game.run_computer_move(Difficulty::Hard)?;
//! assert_eq!(reply, 0);
//! # Ok::<(), strictly_minimax::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod moves;
mod outcome;
mod policy;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Board
pub use types::{Board, CELL_COUNT, Cell, Player};

// Crate-level exports - Rules and move generation
pub use moves::legal_moves;
pub use outcome::Outcome;
pub use rules::{WIN_LINES, check_winner, evaluate, is_full};

// Crate-level exports - Search
pub use search::{DepthLimit, SearchOutcome, WIN_SCORE, search, select_move};

// Crate-level exports - Difficulty policies
pub use policy::{Difficulty, MEDIUM_DEPTH_LIMIT, MinimaxMove, MoveSelector, RandomMove};

// Crate-level exports - Controller
pub use controller::{GameController, GameObserver, GameState, MoveRecord, NoopObserver, Phase};

// Crate-level exports - Configuration and errors
pub use config::{GameConfig, Starter};
pub use error::{ConfigError, GameError, InvalidMoveReason};

// Crate-level exports - Input helpers
pub use position::Position;
