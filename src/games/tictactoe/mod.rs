//! Tic-tac-toe board engine: grid state, placement rules, win detection.

mod rules;
mod types;

pub use rules::{Outcome, PlaceError};
pub use types::{Board, Mark, Position, Square};
