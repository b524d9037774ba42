//! Trivial bot player.

use super::MoveSource;
use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::{Result, bail};
use tracing::debug;

/// Bot that takes the first empty square in row-major scan order.
///
/// Deterministic on purpose: no randomness, no lookahead.
pub struct ScanBot {
    name: String,
    mark: Mark,
}

impl ScanBot {
    /// Creates a new scanning bot.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl MoveSource for ScanBot {
    fn propose(&mut self, board: &Board) -> Result<Position> {
        debug!(bot = %self.name, "bot choosing a square");

        for pos in Position::ALL {
            if board.is_empty(pos) {
                debug!(bot = %self.name, position = %pos, "bot chose a square");
                return Ok(pos);
            }
        }

        bail!("no open squares left")
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
