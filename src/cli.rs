//! Command-line interface for gridmark.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Gridmark - console tic-tac-toe with persisted game records
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Play tic-tac-toe against a friend or the bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode; when omitted, an interactive prompt decides
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Directory the game log is written to
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Append-only CSV results ledger
    #[arg(long, default_value = "game_results.csv")]
    pub results: PathBuf,
}

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// One human (X) against the bot
    Single,
    /// Two humans at one keyboard
    Two,
}
