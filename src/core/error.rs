//! Error types.
//!
//! Only configuration and persistence failures are errors. An illegal move is
//! a normal outcome and is reported by `Game::play_move` returning `false`.

use thiserror::Error;

use super::config::DiscColor;
use super::coord::Coordinate;

/// Errors raised by direct board access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    #[error("coordinate {coord} is outside the {width}x{height} board")]
    OutOfBounds {
        coord: Coordinate,
        width: usize,
        height: usize,
    },
}

/// Errors raised when parsing a board from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// The text contains no rows.
    #[error("board text is empty")]
    Empty,

    /// A row has a different length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell character is not one of `.`, `B`, `W`.
    #[error("unexpected cell character {0:?}")]
    BadChar(char),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when building a board or validating settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A board dimension is below 2.
    #[error("board dimensions {width}x{height} are too small (minimum 2x2)")]
    DimensionTooSmall { width: usize, height: usize },

    /// A board dimension is odd, so the starting cross cannot be centered.
    #[error("board dimensions {width}x{height} must both be even")]
    OddDimension { width: usize, height: usize },

    /// A board dimension exceeds `board::MAX_DIMENSION`.
    #[error("board dimensions {width}x{height} are too large (maximum {max}x{max})", max = crate::board::MAX_DIMENSION)]
    DimensionTooLarge { width: usize, height: usize },

    /// Both players were given the same disc color.
    #[error("both players have the color {0}")]
    DuplicateColor(DiscColor),
}

/// Errors raised while loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file could not be decoded: {0}")]
    Codec(#[from] bincode::Error),

    #[error("stored settings are invalid: {0}")]
    Invalid(#[from] ConfigError),
}
