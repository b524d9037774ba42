//! Rendering collaborator for game presentation.

use crate::games::tictactoe::{Board, Outcome, Position};

/// Presentation surface for a running game.
///
/// Implementations only read the snapshots they are handed; they never touch
/// game state.
pub trait GameUi {
    /// Renders the current board.
    fn show_board(&mut self, board: &Board);

    /// Reports a rejected placement attempt.
    fn reject(&mut self, name: &str, position: Position);

    /// Announces the terminal result.
    fn announce(&mut self, outcome: Outcome);
}

/// Console renderer writing to stdout.
pub struct ConsoleUi;

impl GameUi for ConsoleUi {
    fn show_board(&mut self, board: &Board) {
        println!("\n{}\n", board.display());
    }

    fn reject(&mut self, name: &str, position: Position) {
        println!("{position} is already taken, {name}. Pick another square.");
    }

    fn announce(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) => println!("\n{mark} wins!"),
            Outcome::Draw => println!("\nThe game is a draw."),
        }
    }
}
