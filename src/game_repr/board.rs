//! Board state: the stone grid plus the ordered history of moves applied
//! through this particular `Board` value.
//!
//! The history is the load-bearing part of the model. Candidate generation
//! only proposes cells adjacent to moves recorded in the history, and search
//! branches run on [`Board::snapshot`] copies whose history starts empty, so
//! a branch only ever "sees" the moves made along its own path even though
//! the grid carries every stone. That asymmetry between the root board and
//! its snapshots is a contract, not an accident; see `available_moves`.

use std::fmt;

use smallvec::{smallvec, SmallVec};
use thiserror::Error;

use super::coord::KEY_SPAN;
use super::{Coord, Move, Side, BOARD_SIZE};

/// The four scan directions for line runs: east, south, southeast, northeast.
/// Scanning from every occupied cell covers the reverse directions implicitly.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Contract violations raised by board operations.
///
/// These are not expected runtime conditions: callers validate moves before
/// offering them, and the board re-validates and surfaces the violation
/// rather than masking it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is already occupied")]
    DuplicateMove(Coord),

    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("cannot undo a move on a board with empty history")]
    EmptyHistory,

    #[error("unrecognized cell character {0:?}")]
    InvalidCell(char),
}

/// A 15x15 Gomoku board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE],
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with no recorded history.
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            history: Vec::new(),
        }
    }

    /// Parse a board from textual rows.
    ///
    /// `R` places a Robot stone, `P` a Player stone, and `.` or `_` leave
    /// the cell empty. Stones are applied through [`apply_move`] in
    /// row-major order, so the resulting history is row-major as well.
    ///
    /// [`apply_move`]: Board::apply_move
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let side = match ch {
                    '.' | '_' => continue,
                    'R' => Side::Robot,
                    'P' => Side::Player,
                    other => return Err(BoardError::InvalidCell(other)),
                };
                board.apply_move(Coord::new(row as i32, col as i32), side)?;
            }
        }
        Ok(board)
    }

    /// Place a stone for `side` at `coord` and record it in the history.
    pub fn apply_move(&mut self, coord: Coord, side: Side) -> Result<(), BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.is_occupied(coord) {
            return Err(BoardError::DuplicateMove(coord));
        }
        self.grid[coord.row as usize][coord.col as usize] = Some(side);
        self.history.push(Move::new(coord, side));
        Ok(())
    }

    /// Remove the most recent move recorded in this board's history and
    /// clear its cell. Returns the removed move.
    pub fn undo_last_move(&mut self) -> Result<Move, BoardError> {
        let last = self.history.pop().ok_or(BoardError::EmptyHistory)?;
        self.grid[last.coord.row as usize][last.coord.col as usize] = None;
        Ok(last)
    }

    /// Branch this board for one search path: the grid is copied in full,
    /// the history starts empty.
    ///
    /// This is the only sanctioned way to branch a board inside the search.
    /// Snapshots never alias grid storage, and their empty history restricts
    /// candidate generation to the branch's own moves. A `clone()` is not a
    /// snapshot: it keeps the history and is reserved for handing the root
    /// board to the search engine.
    pub fn snapshot(&self) -> Self {
        Self {
            grid: self.grid,
            history: Vec::new(),
        }
    }

    /// The stone at `coord`, or `None` when the cell is empty or the
    /// coordinate lies off the board.
    pub fn cell(&self, coord: Coord) -> Option<Side> {
        if !coord.in_bounds() {
            return None;
        }
        self.grid[coord.row as usize][coord.col as usize]
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    pub fn occupied_by(&self, coord: Coord, side: Side) -> bool {
        self.cell(coord) == Some(side)
    }

    /// Moves applied through this board value, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Every cell of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Coord::new(row, col)))
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|coord| self.is_occupied(coord))
    }

    /// Candidate cells for the next move.
    ///
    /// With an empty history the single candidate is the board center.
    /// Otherwise every unoccupied cell within Chebyshev distance 1 of a
    /// history move is a candidate; the deduplicated set is returned in
    /// row-major order. On a search snapshot the history holds only that
    /// branch's moves, which is exactly what keeps the branching factor
    /// local to the line being explored.
    pub fn available_moves(&self) -> SmallVec<[Coord; 16]> {
        if self.history.is_empty() {
            return smallvec![Coord::CENTER];
        }

        let mut marked = [false; KEY_SPAN];
        for mv in &self.history {
            for drow in -1..=1 {
                for dcol in -1..=1 {
                    let neighbor = mv.coord.offset(drow, dcol);
                    if neighbor.in_bounds() && !self.is_occupied(neighbor) {
                        marked[neighbor.key()] = true;
                    }
                }
            }
        }

        self.cells().filter(|coord| marked[coord.key()]).collect()
    }

    /// Whether `side` has completed a run of five.
    ///
    /// Game termination lives here and not in the evaluator: the evaluation
    /// weight table saturates at run length 4 and cannot tell a win from a
    /// four-in-a-row.
    pub fn has_five_in_row(&self, side: Side) -> bool {
        self.cells().any(|start| {
            self.occupied_by(start, side)
                && LINE_DIRECTIONS.iter().any(|&(drow, dcol)| {
                    (1..5).all(|step| self.occupied_by(start.offset(drow * step, dcol * step), side))
                })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row:3}")?;
            for col in 0..BOARD_SIZE {
                let glyph = match self.grid[row][col] {
                    None => '.',
                    Some(Side::Robot) => 'R',
                    Some(Side::Player) => 'P',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
