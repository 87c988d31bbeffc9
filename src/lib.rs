//! # reversi-engine
//!
//! A Reversi (Othello) rules engine and game session on rectangular boards
//! of any even size.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine exposes commands and queries only. Drawing,
//!    input and colors belong to whoever drives the session.
//!
//! 2. **Rules Behind a Trait**: Legality and placement effects live in a
//!    `RulesEngine` implementation; turn passing, game-over detection and
//!    scoring are shared default methods.
//!
//! 3. **Deterministic**: Given the same settings and moves, a session always
//!    reaches the same state. Random playouts take an explicit seeded RNG.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, counters, settings, state, errors, RNG
//! - `board`: The grid of marks and its starting cross
//! - `rules`: `RulesEngine` trait and directional flip scanning
//! - `games`: The Reversi rules and the user-facing `Game` session
//! - `python`: pyo3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Coordinate, DiscColor, Direction, GameRng, GameSettings, GameState, Player,
    PlayerMap, SettingsError, SkipState, TurnRecord,
};

pub use crate::board::{Board, Mark};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::reversi::{random_playout, Game, Phase, ReversiRules};
