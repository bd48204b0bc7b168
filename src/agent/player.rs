//! Player trait and associated types for game agents.
//!
//! A player is any entity that can be asked for the next move: a human at a
//! terminal, the search-backed robot, or a scripted sequence in tests. The
//! orchestrator only ever talks to this trait.

use std::fmt;

use crate::game_repr::{Coord, Move, Side};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    RobotWins,
    PlayerWins,
    /// The board filled up without a run of five.
    Draw,
}

impl GameResult {
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::Robot => GameResult::RobotWins,
            Side::Player => GameResult::PlayerWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RobotWins => write!(f, "Robot wins"),
            Self::PlayerWins => write!(f, "Player wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only [`get_move`](Player::get_move) must be implemented; the notification
/// hooks default to doing nothing.
pub trait Player {
    /// Request the next move for `side`.
    ///
    /// May block until a move is available — the human player waits on the
    /// terminal, the robot computes. Returning `None` resigns. The move is
    /// validated by the orchestrator before it reaches the board, and the
    /// board re-validates on application.
    fn get_move(&mut self, side: Side) -> Option<Coord>;

    /// Called after the opponent's move has been executed.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called when the game reaches a terminal state.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name for logs and prompts.
    fn name(&self) -> &str {
        "Player"
    }
}
