//! Turn coordination for a full game.
//!
//! The [`Orchestrator`] is the root coordinator: it owns the shared board,
//! alternates between the two [`Player`] instances, validates every offered
//! move before it reaches the board, and detects the end of the game.
//!
//! # Architecture
//!
//! - The [`Board`] is shared state (`Arc<RefCell<>>`) between the
//!   orchestrator and the players, so a player can consult the position
//!   while choosing a move. All access happens on the calling thread and
//!   borrows are kept short-lived.
//! - [`Player`] trait objects provide moves through a uniform, blocking
//!   interface; the orchestrator does not know a human from a robot.
//!
//! # Game flow
//!
//! ```text
//! [Request move] -> [Validate] -> [Apply to board] -> [Notify opponent]
//!   -> [Check end: five-in-a-row / full board] -> [Switch side] -> ...
//! ```
//!
//! The Player side moves first. A rejected move is re-requested from the
//! same side; a `None` move is a resignation and ends the game.

use std::cell::RefCell;
use std::sync::Arc;

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Board, Move, Side};

/// Root component coordinating one game between two players.
pub struct Orchestrator {
    /// Shared reference to the root board. Accumulates the full game
    /// history; search snapshots branch off copies, never this value.
    board: Arc<RefCell<Board>>,

    /// The two player instances: `.0` plays [`Side::Player`], `.1` plays
    /// [`Side::Robot`].
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Whose turn it is.
    current_turn: Side,

    /// Set once the game has reached a terminal state.
    game_result: Option<GameResult>,

    /// Print the board to stdout after every applied move.
    render: bool,
}

impl Orchestrator {
    /// Create an orchestrator over `board`. `player` moves first as
    /// [`Side::Player`], `robot` answers as [`Side::Robot`].
    ///
    /// Both players usually hold their own handle to the same shared board.
    pub fn new(
        board: Arc<RefCell<Board>>,
        player: Box<dyn Player>,
        robot: Box<dyn Player>,
    ) -> Self {
        Self {
            board,
            players: (player, robot),
            current_turn: Side::Player,
            game_result: None,
            render: false,
        }
    }

    /// Enable or disable printing the board after each move.
    pub fn with_rendering(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// A clone of the shared board handle.
    pub fn board(&self) -> Arc<RefCell<Board>> {
        self.board.clone()
    }

    /// The game result, once the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.game_result
    }

    /// Number of moves applied to the root board so far.
    pub fn move_count(&self) -> usize {
        self.board.borrow().history().len()
    }

    /// Play the game to completion and return the result.
    pub fn run(&mut self) -> GameResult {
        loop {
            if let Some(result) = self.play_turn() {
                return result;
            }
        }
    }

    /// Execute one request/validate/apply cycle for the side to move.
    ///
    /// Returns `Some` when the game ended this turn. Returns `None` both
    /// after a successfully applied move and after a rejected one; in the
    /// latter case the turn does not switch, so the same side is asked
    /// again on the next cycle.
    fn play_turn(&mut self) -> Option<GameResult> {
        let side = self.current_turn;

        let offered = {
            let current = match side {
                Side::Player => &mut self.players.0,
                Side::Robot => &mut self.players.1,
            };
            current.get_move(side)
        };

        let Some(coord) = offered else {
            log::info!("{side} resigns");
            let result = GameResult::from_winner(side.opponent());
            self.finish(result);
            return Some(result);
        };

        // Reject illegal targets before they reach the board. The board
        // re-validates and fails typed if this screen is ever wrong.
        if !coord.in_bounds() {
            log::warn!("rejected {side} move {coord}: outside the board");
            return None;
        }
        if self.board.borrow().is_occupied(coord) {
            log::warn!("rejected {side} move {coord}: cell occupied");
            return None;
        }
        if let Err(err) = self.board.borrow_mut().apply_move(coord, side) {
            log::error!("board rejected validated {side} move {coord}: {err}");
            return None;
        }

        log::info!("{side} plays {coord}");
        if self.render {
            println!("{}", self.board.borrow());
        }

        let opponent = match side {
            Side::Player => &mut self.players.1,
            Side::Robot => &mut self.players.0,
        };
        opponent.opponent_moved(Move::new(coord, side));

        if let Some(result) = self.check_game_end(side) {
            self.finish(result);
            return Some(result);
        }

        self.current_turn = side.opponent();
        None
    }

    /// Detect a terminal position after `side` has just moved.
    fn check_game_end(&self, side: Side) -> Option<GameResult> {
        let board = self.board.borrow();
        if board.has_five_in_row(side) {
            return Some(GameResult::from_winner(side));
        }
        if board.is_full() {
            return Some(GameResult::Draw);
        }
        None
    }

    /// Record the result and notify both players.
    fn finish(&mut self, result: GameResult) {
        log::info!("game over after {} moves: {result}", self.move_count());
        self.game_result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
    }
}
