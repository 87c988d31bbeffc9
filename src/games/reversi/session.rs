//! The game session driven by a user interface.
//!
//! A `Game` is created inert. The caller then:
//!
//! 1. `initialize(&settings)` to build the board and bind the starting player,
//! 2. `start()` to compute the opening legal moves and scores,
//! 3. `play_move(at)` repeatedly until `is_game_over()`,
//! 4. `end_game()` to discard the board and return to the inert state.
//!
//! Calls made in the wrong phase are no-ops; `play_move` reports them by
//! returning `false`.

use tracing::{info, warn};

use super::rules::ReversiRules;
use crate::board::{Board, Mark};
use crate::core::{ConfigError, Coordinate, GameSettings, GameState, Player, TurnRecord};
use crate::rules::{GameResult, RulesEngine};

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game is running. A board may be prepared by `initialize`.
    #[default]
    Inactive,
    /// Moves are accepted.
    Active,
}

/// One Reversi session.
#[derive(Clone, Debug, Default)]
pub struct Game {
    rules: ReversiRules,
    phase: Phase,
    state: Option<GameState>,
}

impl Game {
    /// Create an inert session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize and start a session in one step.
    pub fn started(settings: &GameSettings) -> Result<Self, ConfigError> {
        let mut game = Self::new();
        game.initialize(settings)?;
        game.start();
        Ok(game)
    }

    // === Commands ===

    /// Build a fresh board from `settings` and bind the starting player.
    ///
    /// Leaves the session inactive; any game in progress is discarded, even
    /// when the settings are rejected.
    pub fn initialize(&mut self, settings: &GameSettings) -> Result<(), ConfigError> {
        self.phase = Phase::Inactive;
        self.state = None;
        let board = Board::new(settings.board_width, settings.board_height)?;
        self.state = Some(GameState::new(board, settings.starting_player));
        Ok(())
    }

    /// Start the initialized game.
    pub fn start(&mut self) {
        let Some(state) = self.state.as_mut() else {
            warn!("start called before initialize");
            return;
        };
        self.rules.begin(state);
        self.phase = Phase::Active;
        info!(
            width = state.board().width(),
            height = state.board().height(),
            first = %state.to_move(),
            "game started"
        );
    }

    /// Play a disc for the player to move.
    ///
    /// Returns `false` if the session is inactive or `at` is not a legal move.
    pub fn play_move(&mut self, at: Coordinate) -> bool {
        if self.phase != Phase::Active {
            warn!(%at, "move attempted on an inactive session");
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        let played = self.rules.play(state, at);
        if played {
            if let Some(result) = self.rules.is_terminal(state) {
                info!(%result, "game over");
            }
        }
        played
    }

    /// Discard the board and turn, returning the session to inert.
    pub fn end_game(&mut self) {
        if self.phase == Phase::Active {
            info!("game ended");
        }
        self.phase = Phase::Inactive;
        self.state = None;
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// The full state, if a board exists.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(GameState::board)
    }

    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.board().map(Board::width)
    }

    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.board().map(Board::height)
    }

    /// The player to move.
    #[must_use]
    pub fn current_turn(&self) -> Option<Player> {
        self.state.as_ref().map(GameState::to_move)
    }

    /// The mark at `at`, or `None` if there is no board or `at` is off it.
    #[must_use]
    pub fn mark(&self, at: Coordinate) -> Option<Mark> {
        self.board()?.mark_at(at)
    }

    /// Legal moves for the player to move. Empty when no game is running.
    #[must_use]
    pub fn legal_moves(&self) -> &[Coordinate] {
        self.state.as_ref().map(GameState::legal_moves).unwrap_or_default()
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.state.as_ref().map_or(0, |s| s.score(player))
    }

    /// Have both players passed in succession?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_game_over)
    }

    /// The final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(self.state.as_ref()?)
    }

    /// Turns played so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TurnRecord> + '_ {
        self.state.iter().flat_map(|s| s.history().iter())
    }
}
