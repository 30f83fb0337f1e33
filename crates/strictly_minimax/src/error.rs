//! Error types for the engine.

use crate::controller::Phase;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveReason {
    /// Index outside 0-8.
    #[display("index out of range (must be 0-8)")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The requester is not the side to move.
    #[display("it is not the human's turn")]
    NotYourTurn,
    /// A board cell in text form was neither empty, `X` nor `O`.
    #[display("unrecognized cell mark")]
    Unrecognized,
}

/// Error returned by board and controller operations.
///
/// Both kinds are local and non-fatal: the rejected operation leaves all
/// state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The requested cell cannot be played.
    #[display("Invalid move at {}: {}", index, reason)]
    InvalidMove {
        /// Requested cell index.
        index: usize,
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },

    /// The operation is not permitted in the current phase.
    #[display("Cannot {} while {}", operation, phase)]
    InvalidState {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the controller was in.
        phase: Phase,
    },

    /// A board handed to the controller could not arise in play.
    #[display("Invalid position: {}", reason)]
    InvalidPosition {
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl GameError {
    /// Creates an [`GameError::InvalidMove`].
    pub fn invalid_move(index: usize, reason: InvalidMoveReason) -> Self {
        Self::InvalidMove { index, reason }
    }

    /// Creates an [`GameError::InvalidState`].
    pub fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        Self::InvalidState { operation, phase }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
