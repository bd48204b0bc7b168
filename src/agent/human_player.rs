//! Human player implementation that reads moves from the terminal.
//!
//! `HumanPlayer` holds a shared reference to the board and prompts for
//! `row col` pairs on stdin. Input is validated before it is submitted:
//! unparseable lines, out-of-board coordinates and occupied cells are
//! rejected with a fresh prompt. End of input (or `quit`) resigns.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::agent::player::Player;
use crate::game_repr::{Board, Coord, Move, Side};

pub struct HumanPlayer {
    /// Shared reference to the board, used to validate input before submit
    board: Arc<RefCell<Board>>,
    name: String,
}

impl HumanPlayer {
    pub fn new(board: Arc<RefCell<Board>>, name: String) -> Self {
        Self { board, name }
    }

    /// Parse a `row col` pair. Anything else is `None`.
    fn parse_coord(line: &str) -> Option<Coord> {
        let mut parts = line.split_whitespace();
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Coord::new(row, col))
    }
}

impl Player for HumanPlayer {
    /// Prompt until a legal move is entered. Blocks on the terminal.
    fn get_move(&mut self, side: Side) -> Option<Coord> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{} ({side}) move `row col`: ", self.name);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF or a broken terminal counts as resignation.
                _ => return None,
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return None;
            }

            let Some(coord) = Self::parse_coord(line) else {
                log::warn!("could not parse move {line:?}, expected `row col`");
                continue;
            };
            if !coord.in_bounds() {
                log::warn!("{coord} is outside the board");
                continue;
            }
            if self.board.borrow().is_occupied(coord) {
                log::warn!("{coord} is already occupied");
                continue;
            }

            return Some(coord);
        }
    }

    fn opponent_moved(&mut self, mv: Move) {
        println!("{} played {}", mv.side, mv.coord);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
