//! Game controller: owns the authoritative game state.
//!
//! The controller is a small state machine:
//!
//! - `AwaitingHumanMove` accepts [`GameController::apply_human_move`]
//! - `AwaitingComputerMove` accepts [`GameController::run_computer_move`]
//! - `GameOver` accepts neither until [`GameController::reset`]
//!
//! Presentation stays outside. A UI attaches a [`GameObserver`] to be told
//! about board changes and the end of the game, and schedules the computer's
//! reply (with whatever pacing delay it likes) by calling
//! `run_computer_move` once the phase says so.

use crate::config::GameConfig;
use crate::error::{GameError, InvalidMoveReason};
use crate::moves::legal_moves;
use crate::outcome::Outcome;
use crate::policy::Difficulty;
use crate::rules::evaluate;
use crate::types::{Board, Cell, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// Waiting for the UI to trigger the computer's reply.
    AwaitingComputerMove,
    /// The game ended with this outcome.
    GameOver(Outcome),
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHumanMove => write!(f, "awaiting human move"),
            Phase::AwaitingComputerMove => write!(f, "awaiting computer move"),
            Phase::GameOver(outcome) => write!(f, "game over ({})", outcome),
        }
    }
}

/// A move applied to the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: Player,
    /// Cell index played.
    pub index: usize,
}

/// Board, side to move and current outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Creates the starting state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a state from an existing board. The side to move is derived
    /// from the mark counts.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] if the marks are not turn
    /// balanced.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        if !board.is_turn_balanced() {
            return Err(GameError::InvalidPosition {
                reason: "X must lead O by zero or one mark",
            });
        }
        Ok(Self {
            board,
            to_move: board.side_to_move(),
            outcome: evaluate(&board),
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves applied since the state was created.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Places `to_move`'s mark and re-evaluates.
    fn apply(&mut self, index: usize) -> Result<Outcome, GameError> {
        let player = self.to_move;
        self.board.place(index, player)?;
        self.history.push(MoveRecord { player, index });
        self.to_move = player.opponent();
        self.outcome = evaluate(&self.board);
        Ok(self.outcome)
    }

    /// Turn balance holds and every recorded move is still on the board.
    fn is_consistent(&self) -> bool {
        let recorded = self
            .history
            .iter()
            .all(|mv| self.board.get(mv.index) == Some(Cell::Occupied(mv.player)));
        recorded && self.board.is_turn_balanced() && self.board.side_to_move() == self.to_move
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation hooks.
pub trait GameObserver {
    /// Called after every board mutation, including reset.
    fn on_board_changed(&mut self, _board: &Board) {}

    /// Called once per game when it ends.
    fn on_game_over(&mut self, _outcome: Outcome) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Owns the live game and enforces whose turn it is.
pub struct GameController {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    rng: StdRng,
    observer: Box<dyn GameObserver>,
}

impl GameController {
    /// Creates a controller at the start of a game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let phase = starting_phase(&config);
        info!(%phase, "New game");
        Self {
            config,
            state: GameState::new(),
            phase,
            rng,
            observer: Box::new(NoopObserver),
        }
    }

    /// Creates a controller continuing from `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] if the marks are not turn
    /// balanced.
    #[instrument(skip(board))]
    pub fn from_position(config: GameConfig, board: Board) -> Result<Self, GameError> {
        let state = GameState::from_board(board)?;
        let mut controller = Self::new(config);
        controller.phase = controller.phase_after(&state);
        controller.state = state;
        debug!(phase = %controller.phase, "Loaded position");
        Ok(controller)
    }

    /// Attaches presentation hooks.
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mark played by the human.
    pub fn human_player(&self) -> Player {
        self.config.starter().human_player()
    }

    /// Mark played by the computer.
    pub fn computer_player(&self) -> Player {
        self.config.starter().computer_player()
    }

    /// Cells still open for play. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.phase.is_over() {
            Vec::new()
        } else {
            legal_moves(self.state.board())
        }
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMove`] if the index is out of range, the cell is
    ///   occupied or the computer is to move.
    /// - [`GameError::InvalidState`] if the game is over.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Phase, GameError> {
        match self.phase {
            Phase::AwaitingHumanMove => {}
            Phase::AwaitingComputerMove => {
                warn!("Human move requested on the computer's turn");
                return Err(GameError::invalid_move(index, InvalidMoveReason::NotYourTurn));
            }
            Phase::GameOver(_) => {
                warn!("Human move requested after game over");
                return Err(GameError::invalid_state("apply a human move", self.phase));
            }
        }

        self.apply(index)
    }

    /// Picks and applies the computer's move at the given difficulty.
    ///
    /// Returns the cell played.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the computer is to move.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn run_computer_move(&mut self, difficulty: Difficulty) -> Result<usize, GameError> {
        if self.phase != Phase::AwaitingComputerMove {
            warn!("Computer move requested out of turn");
            return Err(GameError::invalid_state("run a computer move", self.phase));
        }

        let player = self.computer_player();
        let (choice, selector_name) = {
            let mut selector = difficulty.selector(&mut self.rng);
            (selector.select_move(self.state.board(), player), selector.name())
        };
        let Some(index) = choice else {
            return Err(GameError::invalid_state("run a computer move", self.phase));
        };
        debug!(selector = selector_name, index, %player, "Computer chose move");

        self.apply(index)?;
        Ok(index)
    }

    /// Clears the board and returns to the configured starting phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.phase = starting_phase(&self.config);
        info!(phase = %self.phase, "Game reset");
        self.observer.on_board_changed(self.state.board());
    }

    fn apply(&mut self, index: usize) -> Result<Phase, GameError> {
        let outcome = self.state.apply(index)?;
        debug_assert!(self.state.is_consistent(), "game state inconsistent");

        self.phase = self.phase_after(&self.state);
        self.observer.on_board_changed(self.state.board());
        if outcome.is_terminal() {
            info!(%outcome, moves = self.state.history().len(), "Game over");
            self.observer.on_game_over(outcome);
        }
        Ok(self.phase)
    }

    fn phase_after(&self, state: &GameState) -> Phase {
        if state.outcome().is_terminal() {
            Phase::GameOver(state.outcome())
        } else if state.to_move() == self.human_player() {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingComputerMove
        }
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

fn starting_phase(config: &GameConfig) -> Phase {
    if config.starter().human_player() == Player::X {
        Phase::AwaitingHumanMove
    } else {
        Phase::AwaitingComputerMove
    }
}
