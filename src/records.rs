//! Append-only results ledger.
//!
//! One game produces one batch of rows: `[mark, row, col]` per accepted move,
//! then a final `[Winner, mark]` or `[Draw]` row. The ledger file accumulates
//! batches across runs and is never truncated.

use crate::games::tictactoe::{Mark, Outcome, Position};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// One row of the results ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRow {
    /// An accepted move.
    Move {
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Final row of a won game.
    Winner(Mark),
    /// Final row of a drawn game.
    Draw,
}

impl ResultRow {
    /// The final row for a terminal outcome.
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(mark) => ResultRow::Winner(mark),
            Outcome::Draw => ResultRow::Draw,
        }
    }

    fn fields(&self) -> Vec<String> {
        match self {
            ResultRow::Move { mark, position } => vec![
                mark.to_string(),
                position.row().to_string(),
                position.col().to_string(),
            ],
            ResultRow::Winner(mark) => vec!["Winner".to_string(), mark.to_string()],
            ResultRow::Draw => vec!["Draw".to_string()],
        }
    }
}

/// Persistence collaborator for finished games.
pub trait ResultsSink {
    /// Appends a batch of rows. Must never drop or truncate prior rows.
    fn append(&mut self, rows: &[ResultRow]) -> Result<()>;
}

/// CSV-backed ledger, opened in append mode on every flush.
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Creates a ledger writing to `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ResultsSink for CsvLedger {
    fn append(&mut self, rows: &[ResultRow]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening results ledger {}", self.path.display()))?;

        // Rows have different widths, so the writer must be flexible.
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(file);

        for row in rows {
            writer.write_record(row.fields())?;
        }
        writer
            .flush()
            .with_context(|| format!("flushing results ledger {}", self.path.display()))?;
        Ok(())
    }
}
