//! Directional flip scanning.
//!
//! A flip run is the contiguous line of opposing discs between a placed disc
//! and the nearest disc of the mover's own mark in one direction. Running off
//! the board or into an empty cell before reaching an own disc means nothing
//! flips in that direction.

use smallvec::SmallVec;

use crate::board::{Board, Mark};
use crate::core::{Coordinate, Direction};

/// Discs turned over by one placement.
pub type FlipList = SmallVec<[Coordinate; 16]>;

/// Number of discs that would flip in `dir` if `mark` were placed at `from`.
#[must_use]
pub fn run_length(board: &Board, from: Coordinate, dir: Direction, mark: Mark) -> usize {
    let mut count = 0;
    for at in from.ray(dir) {
        match board.mark_at(at) {
            None | Some(Mark::Empty) => return 0,
            Some(m) if m == mark => return count,
            Some(_) => count += 1,
        }
    }
    0
}

/// Every disc that would flip if `mark` were placed at `at`, each listed once.
///
/// Does not check that `at` itself is empty.
#[must_use]
pub fn flips(board: &Board, at: Coordinate, mark: Mark) -> FlipList {
    let mut out = FlipList::new();
    for dir in Direction::ALL {
        let n = run_length(board, at, dir, mark);
        out.extend(at.ray(dir).take(n));
    }
    out
}

/// Is `at` an empty cell where `mark` would flip at least one disc?
#[must_use]
pub fn is_legal_placement(board: &Board, at: Coordinate, mark: Mark) -> bool {
    board.mark_at(at) == Some(Mark::Empty)
        && Direction::ALL
            .iter()
            .any(|&dir| run_length(board, at, dir, mark) > 0)
}
