//! Gridmark - console tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridmark::cli::{Cli, GameMode};
use gridmark::games::tictactoe::Mark;
use gridmark::orchestrator::Orchestrator;
use gridmark::players::{HumanPlayer, MoveSource, ScanBot};
use gridmark::records::CsvLedger;
use gridmark::ui::ConsoleUi;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_dir)?;

    let mode = match cli.mode {
        Some(mode) => mode,
        None => prompt_mode()?,
    };
    info!(?mode, "starting a game");

    let player_x: Box<dyn MoveSource> =
        Box::new(HumanPlayer::new("Player X", Mark::X, io::stdin()));
    let player_o: Box<dyn MoveSource> = match mode {
        GameMode::Single => Box::new(ScanBot::new("Bot", Mark::O)),
        GameMode::Two => Box::new(HumanPlayer::new("Player O", Mark::O, io::stdin())),
    };

    let mut ui = ConsoleUi;
    let mut ledger = CsvLedger::new(&cli.results);

    let mut game = Orchestrator::new(player_x, player_o);
    game.run(&mut ui, &mut ledger)?;

    Ok(())
}

/// Installs the process-wide subscriber, appending to `<log_dir>/game.log`.
///
/// Creating the log directory is part of setup here, not something the game
/// core knows about.
fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let log_path = log_dir.join("game.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .init();

    Ok(())
}

/// Asks whether to play against the bot. Anything other than `y` means two
/// humans.
fn prompt_mode() -> Result<GameMode> {
    print!("Single player mode? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("reading mode selection")?;

    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(GameMode::Single)
    } else {
        Ok(GameMode::Two)
    }
}
