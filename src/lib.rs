//! Gomoku engine: board model, run-based evaluation, and a concurrent
//! depth-limited minimax that decides the Robot's next move.

pub mod agent;
pub mod game_repr;
pub mod orchestrator;
pub mod timing;

pub use agent::ai::{best_move, RobotPlayer, SearchError, SearchResult, SEARCH_DEPTH};
pub use agent::{GameResult, HumanPlayer, Player};
pub use game_repr::{Board, BoardError, Coord, Move, Side, BOARD_SIZE};
pub use orchestrator::Orchestrator;
