// Position evaluation function
// Returns a signed score (positive = good for the Robot)

use crate::game_repr::{Board, Side, LINE_DIRECTIONS};

/// Bound on every reachable evaluation; the search folds start from these.
pub const MAX_SCORE: i32 = 1 << 30;
pub const MIN_SCORE: i32 = -MAX_SCORE;

// Weight of the longest run on the board, indexed by run length 0..=5.
// Lengths 4 and 5 map to the same weight: the table does not distinguish
// "about to win" from "already won".
const RUN_WEIGHTS: [i32; 6] = [0, 10, 100, 1000, 10_000, 10_000];

/// Static evaluation of the whole position.
pub fn evaluate(board: &Board) -> i32 {
    run_score(board, Side::Robot) - run_score(board, Side::Player)
}

/// Weight of the single longest run `side` holds anywhere on the board.
///
/// Every cell occupied by `side` is scanned along the four line directions,
/// counting up to four further same-side stones (run length 1..=5). The
/// result is the weight of the board-wide maximum run length — a max over
/// all (cell, direction) pairs, not a sum, so simultaneous threats are not
/// separately rewarded. Enumeration order cannot affect the result.
pub fn run_score(board: &Board, side: Side) -> i32 {
    let mut longest = 0usize;
    for start in board.cells() {
        if !board.occupied_by(start, side) {
            continue;
        }
        for &(drow, dcol) in &LINE_DIRECTIONS {
            let mut run = 1usize;
            while run < 5 {
                let step = run as i32;
                if !board.occupied_by(start.offset(drow * step, dcol * step), side) {
                    break;
                }
                run += 1;
            }
            longest = longest.max(run);
        }
    }
    RUN_WEIGHTS[longest]
}
