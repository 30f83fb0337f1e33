//! Core domain types for tic-tac-toe.

use crate::error::{GameError, InvalidMoveReason};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Index `i` maps to row `i / 3`, column `i % 3`. The board is a plain value:
/// copying it is how the search takes a private snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places a mark on an empty cell.
    ///
    /// Turn order is not checked here; that belongs to the controller.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the index is out of range or the
    /// cell is already occupied. The board is left unchanged.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        match self.cells.get_mut(index) {
            None => Err(GameError::invalid_move(index, InvalidMoveReason::OutOfRange)),
            Some(Cell::Occupied(_)) => {
                Err(GameError::invalid_move(index, InvalidMoveReason::Occupied))
            }
            Some(cell) => {
                *cell = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Resets a cell to empty. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts the cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// X moves first and turns alternate, so X leads O by zero or one mark.
    pub fn is_turn_balanced(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Player whose turn it is, derived from the mark counts.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Parses the string-array notation `["X", "O", "", ...]`.
    ///
    /// Empty strings are empty cells; `"X"` and `"O"` (case-insensitive) are marks.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] with [`InvalidMoveReason::Unrecognized`]
    /// naming the first cell that is none of those.
    #[instrument]
    pub fn parse(cells: [&str; CELL_COUNT]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for (index, text) in cells.iter().enumerate() {
            board.cells[index] = match text.trim() {
                "" => Cell::Empty,
                "X" | "x" => Cell::Occupied(Player::X),
                "O" | "o" => Cell::Occupied(Player::O),
                _ => {
                    return Err(GameError::invalid_move(
                        index,
                        InvalidMoveReason::Unrecognized,
                    ));
                }
            };
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Renders a 3x3 grid; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
        assert!(!board.is_empty(4));

        board.clear(4);
        assert!(board.is_empty(4));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        let before = board;

        let result = board.place(0, Player::O);
        assert!(matches!(
            result,
            Err(GameError::InvalidMove {
                index: 0,
                reason: InvalidMoveReason::Occupied
            })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        let result = board.place(9, Player::X);
        assert!(matches!(
            result,
            Err(GameError::InvalidMove {
                reason: InvalidMoveReason::OutOfRange,
                ..
            })
        ));
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_turn_balance() {
        let mut board = Board::new();
        assert!(board.is_turn_balanced());
        assert_eq!(board.side_to_move(), Player::X);

        board.place(0, Player::X).unwrap();
        assert!(board.is_turn_balanced());
        assert_eq!(board.side_to_move(), Player::O);

        board.place(1, Player::X).unwrap();
        assert!(!board.is_turn_balanced());

        let o_leads = Board::parse(["O", "", "", "", "", "", "", "", ""]).unwrap();
        assert!(!o_leads.is_turn_balanced());
    }

    #[test]
    fn test_parse_string_notation() {
        let board = Board::parse(["X", "X", "", "", "O", "O", "", "", ""]).unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.get(5), Some(Cell::Occupied(Player::O)));
        assert!(board.is_empty(2));
    }

    #[test]
    fn test_parse_rejects_unknown_marks() {
        let result = Board::parse(["X", "Z", "", "", "", "", "", "", ""]);
        assert!(matches!(
            result,
            Err(GameError::InvalidMove {
                index: 1,
                reason: InvalidMoveReason::Unrecognized
            })
        ));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::parse(["X", "", "", "", "O", "", "", "", ""]).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
