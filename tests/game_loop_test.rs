//! End-to-end games driven through the orchestrator.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use gomoku_ai::agent::ai::RobotPlayer;
use gomoku_ai::agent::{GameResult, Player};
use gomoku_ai::game_repr::{Board, Coord, Move, Side};
use gomoku_ai::orchestrator::Orchestrator;

/// Plays a fixed script of moves, then resigns.
struct ScriptedPlayer {
    moves: VecDeque<Coord>,
}

impl ScriptedPlayer {
    fn new(moves: &[(i32, i32)]) -> Self {
        Self {
            moves: moves.iter().map(|&(row, col)| Coord::new(row, col)).collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn get_move(&mut self, _side: Side) -> Option<Coord> {
        self.moves.pop_front()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn assert_legal_game(history: &[Move], first: Side) {
    let mut seen = Vec::new();
    let mut expected = first;
    for mv in history {
        assert!(mv.coord.in_bounds(), "move {} off the board", mv.coord);
        assert!(!seen.contains(&mv.coord), "cell {} played twice", mv.coord);
        assert_eq!(mv.side, expected, "sides must alternate");
        seen.push(mv.coord);
        expected = expected.opponent();
    }
}

#[test]
fn robot_answers_every_scripted_move_legally() {
    let board = Arc::new(RefCell::new(Board::new()));
    let player = ScriptedPlayer::new(&[(7, 7), (6, 7), (5, 7), (4, 7)]);
    // Depth 2 keeps the test quick; the legality invariants do not depend
    // on playing strength.
    let robot = RobotPlayer::new(board.clone(), 2, "Robot".to_string());

    let mut orchestrator = Orchestrator::new(board.clone(), Box::new(player), Box::new(robot));
    let result = orchestrator.run();

    // The script resigns at the latest after its four moves; the robot may
    // already have won before that.
    assert!(matches!(result, GameResult::RobotWins));
    assert_eq!(orchestrator.result(), Some(result));
    assert_legal_game(board.borrow().history(), Side::Player);
}

#[test]
fn five_in_a_row_ends_the_game() {
    let board = Arc::new(RefCell::new(Board::new()));
    // Both seats scripted: the Player side builds an uncontested row while
    // the Robot seat wanders along the bottom edge.
    let player = ScriptedPlayer::new(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    let filler = ScriptedPlayer::new(&[(14, 0), (14, 1), (14, 2), (14, 3), (14, 4)]);

    let mut orchestrator = Orchestrator::new(board.clone(), Box::new(player), Box::new(filler));
    let result = orchestrator.run();

    assert_eq!(result, GameResult::PlayerWins);
    assert_eq!(orchestrator.move_count(), 9);
    assert!(board.borrow().has_five_in_row(Side::Player));
    assert!(!board.borrow().has_five_in_row(Side::Robot));
}

#[test]
fn immediate_resignation_awards_the_other_side() {
    let board = Arc::new(RefCell::new(Board::new()));
    let player = ScriptedPlayer::new(&[]);
    let robot = ScriptedPlayer::new(&[(7, 7)]);

    let mut orchestrator = Orchestrator::new(board.clone(), Box::new(player), Box::new(robot));
    assert_eq!(orchestrator.run(), GameResult::RobotWins);
    assert_eq!(orchestrator.move_count(), 0);
}

#[test]
fn illegal_offers_are_rejected_and_rerequested() {
    let board = Arc::new(RefCell::new(Board::new()));
    let player = ScriptedPlayer::new(&[(0, 0), (1, 1)]);
    // The filler first offers an occupied cell, then an off-board one, and
    // only then a legal move; the orchestrator must swallow the bad offers
    // without switching turns or touching the board.
    let filler = ScriptedPlayer::new(&[(0, 0), (-1, 3), (5, 5)]);

    let mut orchestrator = Orchestrator::new(board.clone(), Box::new(player), Box::new(filler));
    let result = orchestrator.run();

    // After the scripts run dry the Robot seat resigns first.
    assert_eq!(result, GameResult::PlayerWins);
    let history: Vec<_> = board.borrow().history().to_vec();
    assert_eq!(
        history.iter().map(|mv| mv.coord).collect::<Vec<_>>(),
        vec![Coord::new(0, 0), Coord::new(5, 5), Coord::new(1, 1)]
    );
    assert_legal_game(&history, Side::Player);
}

#[test]
fn core_call_sequence_applies_opponent_then_searches_then_applies_reply() {
    // The orchestration contract at the core boundary, without players:
    // apply the opponent move, search at the fixed depth, apply the result.
    let mut board = Board::new();
    board.apply_move(Coord::new(6, 7), Side::Player).unwrap();

    let result = gomoku_ai::best_move(&board, gomoku_ai::SEARCH_DEPTH).unwrap();
    board.apply_move(result.coord, Side::Robot).unwrap();

    let history = board.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].side, Side::Player);
    assert_eq!(history[1].side, Side::Robot);
    assert_ne!(history[0].coord, history[1].coord);
}
