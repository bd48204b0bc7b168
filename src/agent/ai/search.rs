// Concurrent depth-limited minimax
//
// The search alternates two mutually recursive procedures over board
// snapshots: a maximizing ply that places Robot stones and a minimizing ply
// that places Player stones, bottoming out in the static evaluation when the
// remaining depth reaches zero. There is no pruning beyond the depth bound
// and the locality of candidate generation, and no transposition table.
//
// Concurrency is confined to the first two plies: `best_move` fans out one
// task per root candidate, and each of those runs the minimizing ply below
// it with its own task-per-candidate fan-out. Everything deeper runs
// sequentially, which caps the number of live tasks at roughly
// (root candidates) x (ply-1 candidates) instead of growing with tree depth.
//
// Every task owns its snapshot and reports a self-contained
// (candidate, score) message over a channel. Results are never collected
// through shared keyed storage: sibling branches can produce the same
// best-reply coordinate, so any array indexed by a reply-derived key is a
// write-write race waiting to happen.

use std::sync::mpsc;

use thiserror::Error;

use super::evaluation::{evaluate, MAX_SCORE, MIN_SCORE};
use crate::game_repr::{Board, BoardError, Coord, Side};

/// Failures that abort a move-decision attempt.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The candidate generator produced nothing to search: the board is
    /// full, or the locality heuristic degenerated to an empty set.
    #[error("no available move")]
    NoAvailableMove,

    /// A search branch hit a board-contract violation.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Outcome of a completed [`best_move`] call.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub coord: Coord,
    pub score: i32,
    /// Depth actually searched (requests below 1 are clamped up).
    pub depth: u8,
    /// Number of root candidates examined.
    pub candidates: usize,
}

/// Decide the Robot's next move.
///
/// Spawns one task per root candidate; each snapshots the board, plays its
/// candidate as the Robot and asks the minimizing ply for the Player's best
/// reply. Results are folded in arrival order and only a strictly better
/// score displaces the incumbent, so the winner is the first candidate to
/// have set the running maximum. Arrival order is wall-clock dependent:
/// among tied candidates the choice may vary run to run, while the score is
/// deterministic for a given board and depth.
pub fn best_move(board: &Board, depth: u8) -> Result<SearchResult, SearchError> {
    let depth = depth.max(1);
    let candidates = board.available_moves();
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMove);
    }

    let (sender, receiver) = mpsc::channel();
    rayon::scope(|scope| {
        for &candidate in &candidates {
            let sender = sender.clone();
            scope.spawn(move |_| {
                let outcome = score_robot_reply(board, candidate, depth);
                // The receiver is still alive outside the scope.
                let _ = sender.send((candidate, outcome));
            });
        }
    });
    drop(sender);

    let mut best: Option<(Coord, i32)> = None;
    let mut tied = 0usize;
    for (candidate, outcome) in receiver {
        let score = outcome?;
        log::debug!("candidate {candidate} scores {score}");
        match best {
            None => {
                best = Some((candidate, score));
                tied = 1;
            }
            Some((_, best_score)) if score > best_score => {
                best = Some((candidate, score));
                tied = 1;
            }
            Some((_, best_score)) if score == best_score => tied += 1,
            Some(_) => {}
        }
    }

    let (coord, score) = best.ok_or(SearchError::NoAvailableMove)?;
    log::info!(
        "searched {} candidates at depth {depth}: {coord} scores {score}, {tied} tied",
        candidates.len()
    );
    Ok(SearchResult {
        coord,
        score,
        depth,
        candidates: candidates.len(),
    })
}

/// Score one root candidate: branch the board, play the candidate as the
/// Robot and let the minimizing ply answer.
fn score_robot_reply(board: &Board, candidate: Coord, depth: u8) -> Result<i32, SearchError> {
    let mut branch = board.snapshot();
    branch.apply_move(candidate, Side::Robot)?;
    let (_, score) = minimizing_search_parallel(&branch, depth - 1)?;
    Ok(score)
}

/// Parallel rendition of [`minimizing_search`] for the ply directly below
/// [`best_move`]: one task per candidate, a synchronous join, per-candidate
/// result messages. All recursion underneath is sequential.
fn minimizing_search_parallel(board: &Board, depth: u8) -> Result<(Option<Coord>, i32), SearchError> {
    if depth == 0 {
        return Ok((None, evaluate(board)));
    }

    let candidates = board.available_moves();
    let (sender, receiver) = mpsc::channel();
    rayon::scope(|scope| {
        for &candidate in &candidates {
            let sender = sender.clone();
            scope.spawn(move |_| {
                let outcome = (|| -> Result<i32, SearchError> {
                    let mut branch = board.snapshot();
                    branch.apply_move(candidate, Side::Player)?;
                    let (_, score) = maximizing_search(&branch, depth - 1)?;
                    Ok(score)
                })();
                let _ = sender.send((candidate, outcome));
            });
        }
    });
    drop(sender);

    let mut best = (None, MAX_SCORE);
    for (candidate, outcome) in receiver {
        let score = outcome?;
        if score < best.1 {
            best = (Some(candidate), score);
        }
    }
    Ok(best)
}

/// Best score the Robot can force from `board` with `depth` plies left.
///
/// Candidates run sequentially; ties keep the first candidate in generation
/// order. An empty candidate set folds to `MIN_SCORE`.
pub(super) fn maximizing_search(board: &Board, depth: u8) -> Result<(Option<Coord>, i32), SearchError> {
    if depth == 0 {
        return Ok((None, evaluate(board)));
    }

    let mut best = (None, MIN_SCORE);
    for &candidate in &board.available_moves() {
        let mut branch = board.snapshot();
        branch.apply_move(candidate, Side::Robot)?;
        let (_, score) = minimizing_search(&branch, depth - 1)?;
        if score > best.1 {
            best = (Some(candidate), score);
        }
    }
    Ok(best)
}

/// Mirror of [`maximizing_search`]: the Player picks the reply that drives
/// the evaluation as low as possible. An empty candidate set folds to
/// `MAX_SCORE`.
pub(super) fn minimizing_search(board: &Board, depth: u8) -> Result<(Option<Coord>, i32), SearchError> {
    if depth == 0 {
        return Ok((None, evaluate(board)));
    }

    let mut best = (None, MAX_SCORE);
    for &candidate in &board.available_moves() {
        let mut branch = board.snapshot();
        branch.apply_move(candidate, Side::Player)?;
        let (_, score) = maximizing_search(&branch, depth - 1)?;
        if score < best.1 {
            best = (Some(candidate), score);
        }
    }
    Ok(best)
}
