//! Game orchestration between two move sources.

use crate::games::tictactoe::{Board, Mark, Outcome};
use crate::players::MoveSource;
use crate::records::{ResultRow, ResultsSink};
use crate::ui::GameUi;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Drives one game between two move sources.
///
/// Owns the board for the lifetime of the game: one orchestrator, one board,
/// created at start and dropped at the end. Only this type ever mutates the
/// board; sources and the UI see read-only snapshots.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn MoveSource>,
    player_o: Box<dyn MoveSource>,
    to_move: Mark,
    journal: Vec<ResultRow>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game. X moves first.
    pub fn new(player_x: Box<dyn MoveSource>, player_o: Box<dyn MoveSource>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            to_move: Mark::X,
            journal: Vec::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rows recorded so far: accepted moves, then the outcome row once the
    /// game has finished.
    pub fn journal(&self) -> &[ResultRow] {
        &self.journal
    }

    /// Runs the game to completion and flushes the journal to `results`.
    ///
    /// A rejected placement keeps the same player active with no retry limit,
    /// so a source that never yields a legal move keeps the loop spinning.
    /// That is fine for humans and for correctly written bots; guarding
    /// against a hostile source is out of scope.
    pub fn run(&mut self, ui: &mut dyn GameUi, results: &mut dyn ResultsSink) -> Result<Outcome> {
        info!("game started");

        let outcome = loop {
            if let Some(outcome) = self.board.outcome() {
                break outcome;
            }

            ui.show_board(&self.board);

            let mark = self.to_move;
            let source = match mark {
                Mark::X => self.player_x.as_mut(),
                Mark::O => self.player_o.as_mut(),
            };
            let name = source.name().to_string();

            debug!(player = %name, %mark, "waiting for move");
            let position = source.propose(&self.board)?;

            match self.board.try_place(position, mark) {
                Ok(()) => {
                    info!(%mark, row = position.row(), col = position.col(), "move accepted");
                    self.journal.push(ResultRow::Move { mark, position });
                    self.to_move = mark.opponent();
                }
                Err(err) => {
                    warn!(player = %name, %mark, %position, %err, "invalid move");
                    ui.reject(&name, position);
                }
            }
        };

        ui.show_board(&self.board);
        match outcome {
            Outcome::Win(mark) => info!(%mark, "game won"),
            Outcome::Draw => info!("game drawn"),
        }
        ui.announce(outcome);

        self.journal.push(ResultRow::from_outcome(outcome));
        results.append(&self.journal)?;

        Ok(outcome)
    }
}
