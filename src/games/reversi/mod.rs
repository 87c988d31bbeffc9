//! Reversi (Othello).
//!
//! Two players alternately place discs on an even-sized board. A placement
//! must bracket at least one straight run of opposing discs, which then
//! flip. A player with no legal placement passes; two passes in a row end
//! the game and the player with more discs wins.
//!
//! ```
//! use reversi_engine::games::reversi::Game;
//! use reversi_engine::core::{Coordinate, GameSettings, Player};
//!
//! let mut game = Game::started(&GameSettings::new()).unwrap();
//! assert!(game.play_move(Coordinate::new(2, 3)));
//! assert_eq!(game.score(Player::One), 4);
//! assert_eq!(game.current_turn(), Some(Player::Two));
//! ```

mod playout;
mod rules;
mod session;

pub use playout::random_playout;
pub use rules::ReversiRules;
pub use session::{Game, Phase};
