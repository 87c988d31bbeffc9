//! Rules engine trait.
//!
//! Implementors define which placements are legal and what a placement does
//! to the board. Turn passing, game-end detection and score upkeep are shared
//! by every implementation and provided as default methods.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Coordinate, Counter, GameState, MoveList, Player, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The player with more discs.
    Winner(Player),
    /// Both players hold the same number of discs.
    Draw,
}

impl GameResult {
    /// Decide the result from final disc counts.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<Counter>) -> Self {
        let (one, two) = (scores[Player::One].count(), scores[Player::Two].count());
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return an empty list if the player has to pass
/// - `apply_move`: Must leave the state untouched when the placement is illegal
/// - Everything here is synchronous and deterministic
pub trait RulesEngine {
    /// Every legal placement for `player` on the current board.
    fn legal_moves(&self, state: &GameState, player: Player) -> MoveList;

    /// Place a disc for the player to move and flip what it captures.
    ///
    /// Returns the number of flipped discs, or `None` if the placement is not
    /// legal. Does not change the turn.
    fn apply_move(&self, state: &mut GameState, at: Coordinate) -> Option<u32>;

    // === Provided Methods ===

    /// Recompute the legal moves for the player to move, passing the turn
    /// while that player is blocked.
    ///
    /// A second pass in a row ends the game. The turn is still handed over on
    /// that final pass, and the (empty) legal moves of the resulting player
    /// are cached.
    fn update_legal_moves(&self, state: &mut GameState) {
        loop {
            let player = state.to_move();
            let moves = self.legal_moves(state, player);

            if state.is_game_over() {
                state.set_legal_moves(moves);
                return;
            }

            if moves.is_empty() {
                debug!(%player, "no legal move, passing");
                state.record_pass(player);
                state.set_skip_state(state.skip_state().after_pass());
                state.switch_turn();
                if state.is_game_over() {
                    info!("both players passed, game over");
                }
            } else {
                state.set_skip_state(state.skip_state().after_move_found());
                state.set_legal_moves(moves);
                return;
            }
        }
    }

    /// Reset pass tracking and compute the opening legal moves and scores.
    fn begin(&self, state: &mut GameState) {
        state.set_skip_state(Default::default());
        self.update_legal_moves(state);
        state.recount_scores();
    }

    /// Play a full turn: place, flip, hand over the turn, refresh the legal
    /// moves and recount both scores.
    ///
    /// Returns `false`, leaving the state untouched, if `at` is not in the
    /// cached legal-move set.
    fn play(&self, state: &mut GameState, at: Coordinate) -> bool {
        if !state.is_legal(at) {
            return false;
        }
        let player = state.to_move();
        let Some(flipped) = self.apply_move(state, at) else {
            return false;
        };
        debug!(%player, %at, flipped, "move played");

        state.switch_turn();
        self.update_legal_moves(state);
        state.recount_scores();
        true
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state
            .is_game_over()
            .then(|| GameResult::from_scores(state.scores()))
    }
}
