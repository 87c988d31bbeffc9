//! Uniformly random playouts.

use tracing::debug;

use super::session::Game;
use crate::core::GameRng;

/// Play uniformly random legal moves until the game ends.
///
/// Returns the number of placements made. Does nothing on an inactive
/// session.
pub fn random_playout(game: &mut Game, rng: &mut GameRng) -> usize {
    let mut placed = 0;
    while game.is_active() && !game.is_game_over() {
        let Some(at) = rng.pick_move(game.legal_moves()) else {
            break;
        };
        if !game.play_move(at) {
            break;
        }
        placed += 1;
    }
    debug!(placed, seed = rng.seed(), "playout finished");
    placed
}
