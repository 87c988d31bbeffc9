//! Game state: board, turn, pass tracking, legal moves and scores.
//!
//! ## GameState
//!
//! Everything the rules engine needs to continue a game:
//! - The board
//! - The player to move and the cached legal moves for that player
//! - The pass state machine
//! - Per-player scores, rebuilt from the board after every move
//! - The turn history
//!
//! Uses an `im` vector for the history so cloning a state stays cheap.
//!
//! ## SkipState
//!
//! Game end is detected by two passes in a row. The transitions are:
//!
//! ```text
//!   Moving  --pass-->  OnePass  --pass-->  Over
//!     ^                  |                  |
//!     +----has moves-----+                (sticky)
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coordinate;
use super::counter::Counter;
use super::player::{Player, PlayerMap};
use super::record::TurnRecord;
use crate::board::Board;

/// Legal moves for one player. Most positions have well under 16.
pub type MoveList = SmallVec<[Coordinate; 16]>;

/// Consecutive-pass tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipState {
    /// The last player to move had a legal move.
    #[default]
    Moving,
    /// One player has just passed.
    OnePass,
    /// Both players passed in succession. Terminal.
    Over,
}

impl SkipState {
    /// State after the player to move turned out to have no legal move.
    #[must_use]
    pub const fn after_pass(self) -> Self {
        match self {
            SkipState::Moving => SkipState::OnePass,
            SkipState::OnePass | SkipState::Over => SkipState::Over,
        }
    }

    /// State after the player to move turned out to have a legal move.
    #[must_use]
    pub const fn after_move_found(self) -> Self {
        match self {
            SkipState::Over => SkipState::Over,
            _ => SkipState::Moving,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, SkipState::Over)
    }
}

/// Complete state of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    skip: SkipState,
    legal_moves: MoveList,
    scores: PlayerMap<Counter>,
    history: Vector<TurnRecord>,
    next_sequence: u32,
}

impl GameState {
    /// Create a state for `board` with `to_move` about to play.
    ///
    /// Legal moves and scores are empty until the rules engine refreshes them.
    #[must_use]
    pub fn new(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            skip: SkipState::Moving,
            legal_moves: MoveList::new(),
            scores: PlayerMap::default(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Board ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    // === Turn ===

    /// The player to move.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Hand the turn to the other player.
    pub(crate) fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    #[must_use]
    pub fn skip_state(&self) -> SkipState {
        self.skip
    }

    pub(crate) fn set_skip_state(&mut self, skip: SkipState) {
        self.skip = skip;
    }

    /// Have both players passed in succession?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.skip.is_over()
    }

    // === Legal Moves ===

    /// Cached legal moves for the player to move, in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> &[Coordinate] {
        &self.legal_moves
    }

    pub(crate) fn set_legal_moves(&mut self, moves: MoveList) {
        self.legal_moves = moves;
    }

    /// Is `at` in the cached legal-move set?
    #[must_use]
    pub fn is_legal(&self, at: Coordinate) -> bool {
        self.legal_moves.contains(&at)
    }

    // === Scores ===

    /// Number of discs `player` has on the board, as of the last recount.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player].count()
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<Counter> {
        &self.scores
    }

    /// Reset both counters and rebuild them with a full board scan.
    pub fn recount_scores(&mut self) {
        for (_, counter) in self.scores.iter_mut() {
            counter.reset();
        }
        for (_, mark) in self.board.cells() {
            if let Some(owner) = mark.owner() {
                self.scores[owner].raise();
            }
        }
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    fn next_sequence(&mut self) -> u32 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    pub(crate) fn record_placement(&mut self, player: Player, at: Coordinate, flipped: u32) {
        let sequence = self.next_sequence();
        self.history.push_back(TurnRecord::Placed {
            player,
            at,
            flipped,
            sequence,
        });
    }

    pub(crate) fn record_pass(&mut self, player: Player) {
        let sequence = self.next_sequence();
        self.history.push_back(TurnRecord::Passed { player, sequence });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_skip_state_transitions() {
        let s = SkipState::default();
        assert_eq!(s, SkipState::Moving);

        let s = s.after_pass();
        assert_eq!(s, SkipState::OnePass);
        assert_eq!(s.after_move_found(), SkipState::Moving);

        let s = s.after_pass();
        assert!(s.is_over());
        assert!(s.after_pass().is_over());
        assert!(s.after_move_found().is_over());
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Board::new(8, 8).unwrap(), Player::Two);

        assert_eq!(state.to_move(), Player::Two);
        assert_eq!(state.skip_state(), SkipState::Moving);
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.score(Player::One), 0);
        assert!(state.history().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_recount_scores() {
        let mut state = GameState::new(Board::new(8, 8).unwrap(), Player::One);
        state.recount_scores();
        assert_eq!(state.score(Player::One), 2);
        assert_eq!(state.score(Player::Two), 2);

        state.board_mut().set(Coordinate::new(0, 0), Mark::Black).unwrap();
        state.recount_scores();
        assert_eq!(state.score(Player::One), 3);
        assert_eq!(state.score(Player::Two), 2);

        // recount is idempotent
        state.recount_scores();
        assert_eq!(state.score(Player::One), 3);
    }

    #[test]
    fn test_switch_turn() {
        let mut state = GameState::new(Board::new(4, 4).unwrap(), Player::One);
        state.switch_turn();
        assert_eq!(state.to_move(), Player::Two);
        state.switch_turn();
        assert_eq!(state.to_move(), Player::One);
    }

    #[test]
    fn test_history_sequence() {
        let mut state = GameState::new(Board::new(4, 4).unwrap(), Player::One);
        state.record_placement(Player::One, Coordinate::new(0, 1), 1);
        state.record_pass(Player::Two);

        let seqs: Vec<_> = state.history().iter().map(TurnRecord::sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert!(state.history()[1].is_pass());
    }

    #[test]
    fn test_state_clone_is_independent() {
        let mut state = GameState::new(Board::new(4, 4).unwrap(), Player::One);
        state.record_pass(Player::One);

        let mut cloned = state.clone();
        cloned.record_pass(Player::Two);

        assert_eq!(state.history().len(), 1);
        assert_eq!(cloned.history().len(), 2);
    }
}
