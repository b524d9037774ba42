//! End-to-end game scenarios driven through the orchestrator.

use anyhow::{Result, anyhow};
use gridmark::{
    Board, GameUi, Mark, MoveSource, Orchestrator, Outcome, Position, ResultRow, ResultsSink,
    ScanBot,
};
use std::collections::VecDeque;

/// Move source that replays a fixed script.
struct Scripted {
    name: &'static str,
    mark: Mark,
    moves: VecDeque<Position>,
}

impl Scripted {
    fn new(name: &'static str, mark: Mark, moves: &[(u8, u8)]) -> Self {
        Self {
            name,
            mark,
            moves: moves
                .iter()
                .map(|&(row, col)| Position::new(row, col).expect("coordinate in range"))
                .collect(),
        }
    }
}

impl MoveSource for Scripted {
    fn propose(&mut self, _board: &Board) -> Result<Position> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted for {}", self.name))
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// UI that swallows everything.
struct SilentUi;

impl GameUi for SilentUi {
    fn show_board(&mut self, _board: &Board) {}
    fn reject(&mut self, _name: &str, _position: Position) {}
    fn announce(&mut self, _outcome: Outcome) {}
}

/// Sink that records appended rows in memory.
#[derive(Default)]
struct RecordingSink {
    rows: Vec<ResultRow>,
}

impl ResultsSink for RecordingSink {
    fn append(&mut self, rows: &[ResultRow]) -> Result<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}

fn mv(mark: Mark, row: u8, col: u8) -> ResultRow {
    ResultRow::Move {
        mark,
        position: Position::new(row, col).expect("coordinate in range"),
    }
}

#[test]
fn test_top_row_win_stops_before_board_fills() {
    let player_x = Scripted::new("X script", Mark::X, &[(0, 0), (0, 1), (0, 2)]);
    let player_o = Scripted::new("O script", Mark::O, &[(1, 1), (2, 2)]);

    let mut game = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut sink = RecordingSink::default();
    let outcome = game.run(&mut SilentUi, &mut sink).expect("game runs");

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert!(!game.board().is_full());
    assert_eq!(
        sink.rows,
        vec![
            mv(Mark::X, 0, 0),
            mv(Mark::O, 1, 1),
            mv(Mark::X, 0, 1),
            mv(Mark::O, 2, 2),
            mv(Mark::X, 0, 2),
            ResultRow::Winner(Mark::X),
        ],
    );
}

#[test]
fn test_full_board_without_line_ends_in_draw() {
    let player_x = Scripted::new(
        "X script",
        Mark::X,
        &[(0, 0), (0, 1), (2, 0), (1, 2), (2, 2)],
    );
    let player_o = Scripted::new("O script", Mark::O, &[(1, 1), (0, 2), (1, 0), (2, 1)]);

    let mut game = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut sink = RecordingSink::default();
    let outcome = game.run(&mut SilentUi, &mut sink).expect("game runs");

    assert_eq!(outcome, Outcome::Draw);
    assert!(game.board().is_full());
    assert_eq!(sink.rows.len(), 10);
    assert_eq!(sink.rows.last(), Some(&ResultRow::Draw));
}

#[test]
fn test_rejected_move_keeps_the_same_player_active() {
    // O first tries the square X already holds; the retry must stay with O,
    // so O's second scripted move lands before X moves again.
    let player_x = Scripted::new("X script", Mark::X, &[(0, 0), (0, 1), (0, 2)]);
    let player_o = Scripted::new("O script", Mark::O, &[(0, 0), (1, 1), (2, 2)]);

    let mut game = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut sink = RecordingSink::default();
    let outcome = game.run(&mut SilentUi, &mut sink).expect("game runs");

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(
        sink.rows,
        vec![
            mv(Mark::X, 0, 0),
            mv(Mark::O, 1, 1),
            mv(Mark::X, 0, 1),
            mv(Mark::O, 2, 2),
            mv(Mark::X, 0, 2),
            ResultRow::Winner(Mark::X),
        ],
        "the rejected placement is not journaled and does not switch turns",
    );
}

#[test]
fn test_scripted_human_beats_scanning_bot() {
    // The bot fills (0,0) then (0,1) while X walks down the right column.
    let player_x = Scripted::new("X script", Mark::X, &[(0, 2), (1, 2), (2, 2)]);
    let player_o = ScanBot::new("Bot", Mark::O);

    let mut game = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut sink = RecordingSink::default();
    let outcome = game.run(&mut SilentUi, &mut sink).expect("game runs");

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(
        sink.rows,
        vec![
            mv(Mark::X, 0, 2),
            mv(Mark::O, 0, 0),
            mv(Mark::X, 1, 2),
            mv(Mark::O, 0, 1),
            mv(Mark::X, 2, 2),
            ResultRow::Winner(Mark::X),
        ],
    );
}

#[test]
fn test_journal_matches_sink_rows() {
    let player_x = Scripted::new("X script", Mark::X, &[(0, 0), (0, 1), (0, 2)]);
    let player_o = Scripted::new("O script", Mark::O, &[(1, 1), (2, 2)]);

    let mut game = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut sink = RecordingSink::default();
    game.run(&mut SilentUi, &mut sink).expect("game runs");

    assert_eq!(game.journal(), sink.rows.as_slice());
}
