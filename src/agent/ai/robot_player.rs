// Robot player: drives the minimax search at a fixed depth

use std::cell::RefCell;
use std::sync::Arc;

use super::search::best_move;
use crate::agent::player::Player;
use crate::game_repr::{Board, Coord, Side};
use crate::timing::ScopedTimer;

/// Search depth for every Robot move.
pub const SEARCH_DEPTH: u8 = 4;

/// AI player backed by the concurrent minimax search.
pub struct RobotPlayer {
    /// Shared handle to the root game board.
    board: Arc<RefCell<Board>>,
    depth: u8,
    name: String,
}

impl RobotPlayer {
    pub fn new(board: Arc<RefCell<Board>>, depth: u8, name: String) -> Self {
        Self { board, depth, name }
    }

    /// A robot named "Robot" searching at [`SEARCH_DEPTH`].
    pub fn new_default(board: Arc<RefCell<Board>>) -> Self {
        Self::new(board, SEARCH_DEPTH, "Robot".to_string())
    }
}

impl Player for RobotPlayer {
    /// Compute the next move. Blocks for the duration of the search.
    fn get_move(&mut self, side: Side) -> Option<Coord> {
        // The search maximizes for the Robot side.
        debug_assert_eq!(side, Side::Robot);

        // Clone the root board out of the shared cell so no borrow is held
        // while the search runs. A clone keeps the full history, which root
        // candidate generation needs; snapshot() is for search branches.
        let board = self.board.borrow().clone();

        let _timer = ScopedTimer::new("best_move");
        match best_move(&board, self.depth) {
            Ok(result) => {
                log::info!(
                    "{} plays {} (score {}, {} candidates at depth {})",
                    self.name,
                    result.coord,
                    result.score,
                    result.candidates,
                    result.depth,
                );
                Some(result.coord)
            }
            Err(err) => {
                // Contract violation or nothing left to play: resign rather
                // than offer a corrupted move.
                log::error!("{} aborts its move: {err}", self.name);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
