//! Human player that reads moves from an input stream.

use super::MoveSource;
use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::{Result, bail};
use std::io::{self, BufRead, Cursor, Write};

/// Blocking line-oriented input for a human player.
///
/// `Ok(0)` means the stream is closed.
pub trait LineInput {
    /// Reads one line, appending into `buf`.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Process stdin. Locks per read, so both players of a two-human game can
/// hold a handle without deadlocking, and type-ahead stays in the shared
/// buffer.
impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

/// In-memory input for tests and scripted runs.
impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading "row col" lines from an injected input.
///
/// Production code hands it stdin; tests hand it a cursor. Malformed input
/// (non-numeric, wrong arity, out of range) is rejected here with a re-prompt
/// and never reaches the board.
pub struct HumanPlayer<R> {
    name: String,
    mark: Mark,
    input: R,
}

impl<R: LineInput> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, mark: Mark, input: R) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
        }
    }
}

impl<R: LineInput> MoveSource for HumanPlayer<R> {
    fn propose(&mut self, _board: &Board) -> Result<Position> {
        loop {
            print!(
                "{} ({}), enter row and column (0-2), e.g. `0 2`: ",
                self.name, self.mark
            );
            io::stdout().flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input stream closed while waiting for {}", self.name);
            }

            match parse_coordinates(&line) {
                Some(pos) => return Ok(pos),
                None => {
                    println!("Could not read that as a move. Two numbers between 0 and 2, please.")
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses a "row col" pair; `None` on anything non-numeric, with extra
/// tokens, or outside the grid.
fn parse_coordinates(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Position::new(row, col)
}
