use std::cell::RefCell;
use std::sync::Arc;

use gomoku_ai::agent::ai::RobotPlayer;
use gomoku_ai::agent::HumanPlayer;
use gomoku_ai::game_repr::Board;
use gomoku_ai::orchestrator::Orchestrator;

fn main() {
    env_logger::init();

    println!("Gomoku: you play P, the engine plays R.");
    println!("Moves are 0-based `row col` pairs; `quit` resigns.");
    println!();

    let board = Arc::new(RefCell::new(Board::new()));
    println!("{}", board.borrow());

    let human = HumanPlayer::new(board.clone(), "Human".to_string());
    let robot = RobotPlayer::new_default(board.clone());

    let mut orchestrator =
        Orchestrator::new(board, Box::new(human), Box::new(robot)).with_rendering(true);
    let result = orchestrator.run();

    println!("Game over: {result}.");
}
