//! Terminal presentation hooks.

use strictly_minimax::{Board, GameObserver, Outcome};

/// Prints the board after every change and the result at the end.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl GameObserver for TerminalRenderer {
    fn on_board_changed(&mut self, board: &Board) {
        println!("\n{}\n", board);
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(player) => println!("{} wins!", player),
            None => println!("It's a draw!"),
        }
        println!("Type 'new' to play again or 'quit' to exit.");
    }
}
