//! Core engine types: coordinates, players, counters, settings, state, RNG.
//!
//! These are the building blocks shared by the board, the rules and the
//! session. None of them know how Reversi is played.

pub mod config;
pub mod coord;
pub mod counter;
pub mod error;
pub mod persist;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use config::{DiscColor, GameSettings, UnknownColor, BOARD_SIZE_CHOICES};
pub use coord::{Coordinate, Direction};
pub use counter::Counter;
pub use error::{BoardError, BoardParseError, ConfigError, SettingsError};
pub use persist::DEFAULT_SETTINGS_FILE;
pub use player::{Player, PlayerMap};
pub use record::TurnRecord;
pub use rng::GameRng;
pub use state::{GameState, MoveList, SkipState};
