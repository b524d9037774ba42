//! Gridmark - console tic-tac-toe with persisted game records.
//!
//! # Architecture
//!
//! - **Games**: the board engine - grid state, placement rules, win/draw
//!   detection. Terminality is a pure function of grid contents.
//! - **Players**: move sources (human keyboard input, scanning bot) behind
//!   the [`MoveSource`] trait.
//! - **Orchestrator**: drives turn alternation, feeds moves to the board,
//!   and forwards the finished game to the results ledger.
//! - **Records**: append-only CSV ledger of moves and outcomes.
//!
//! # Example
//!
//! ```
//! use gridmark::{Board, Mark, Position};
//!
//! let mut board = Board::new();
//! let center = Position::new(1, 1).unwrap();
//! board.try_place(center, Mark::X)?;
//! assert!(board.outcome().is_none());
//! # Ok::<(), gridmark::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod games;
pub mod orchestrator;
pub mod players;
pub mod records;
pub mod ui;

// Crate-level exports - board engine
pub use games::tictactoe::{Board, Mark, Outcome, PlaceError, Position, Square};

// Crate-level exports - orchestration
pub use orchestrator::Orchestrator;

// Crate-level exports - move sources
pub use players::{HumanPlayer, LineInput, MoveSource, ScanBot};

// Crate-level exports - results ledger
pub use records::{CsvLedger, ResultRow, ResultsSink};

// Crate-level exports - rendering
pub use ui::{ConsoleUi, GameUi};
