//! Placement rules and terminal-state detection.

use super::types::{Board, Mark, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A rejected placement. Recoverable: the caller re-prompts or retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The targeted square already holds a mark.
    #[display("square is already taken")]
    SquareTaken,
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The given mark completed a line.
    Win(Mark),
    /// The board filled with no line completed.
    Draw,
}

/// The 8 winning lines as row-major indices: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    /// Places `mark` at `pos` if the square is empty.
    ///
    /// On rejection the grid is left untouched; occupancy is the only thing
    /// that can make a placement fail, since a `Position` is in range by
    /// construction.
    #[instrument(skip(self), fields(position = %pos, mark = %mark))]
    pub fn try_place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            return Err(PlaceError::SquareTaken);
        }
        self.set(pos, Square::Taken(mark));
        Ok(())
    }

    /// Checks for a winner: the mark of any line uniformly held by one mark.
    ///
    /// Recomputed from the squares on every call; nothing is cached.
    pub fn winner(&self) -> Option<Mark> {
        for line in LINES {
            if let [Square::Taken(a), Square::Taken(b), Square::Taken(c)] =
                line.map(|i| self.squares()[i])
            {
                if a == b && b == c {
                    return Some(a);
                }
            }
        }
        None
    }

    /// Checks whether no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.squares().iter().all(|&s| s != Square::Empty)
    }

    /// The terminal state, if the game is over.
    ///
    /// A completed line takes precedence over a full board: a move that both
    /// finishes a line and fills the last square is a win, never a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Win(mark))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}
