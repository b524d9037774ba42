//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Taken(Mark),
}

/// A (row, column) coordinate on the board, each component in 0..=2.
///
/// Construction is validated: [`Position::new`] returns `None` for anything
/// outside the grid, so a `Position` held by the board engine is in range by
/// construction. Range checking of raw input happens at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All positions in row-major scan order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is out of range.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Self::new((index / 3) as u8, (index % 3) as u8)
        } else {
            None
        }
    }

    /// The row (0-2).
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The column (0-2).
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into the board's squares (0-8).
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Positions that are still empty on the given board, row-major order.
    pub fn open_positions(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

/// 3x3 tic-tac-toe board.
///
/// The grid is the whole state: there is no cached winner or game-over flag,
/// so terminality can never fall out of sync with the squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks whether the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// All squares as a read-only snapshot, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    pub(super) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Formats the board as a human-readable grid, `.` for empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".",
                    Square::Taken(Mark::X) => "X",
                    Square::Taken(Mark::O) => "O",
                };
                result.push_str(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
