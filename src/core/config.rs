//! Game settings.
//!
//! The surrounding application owns a `GameSettings` record, lets the user
//! edit it and persists it (see `core::persist`). The rules engine consumes
//! only the board dimensions and the starting player; disc colors are carried
//! for the presentation layer.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

use super::error::ConfigError;
use super::player::Player;
use crate::board::Board;

/// Square board sizes offered to the user.
pub const BOARD_SIZE_CHOICES: RangeInclusive<usize> = 4..=20;

/// Named disc colors a player can pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscColor {
    Black,
    White,
    Green,
    Purple,
    Yellow,
    Blue,
    Red,
    Brown,
    Orange,
    Pink,
}

impl DiscColor {
    /// Every color in the palette.
    pub const ALL: [DiscColor; 10] = [
        DiscColor::Black,
        DiscColor::White,
        DiscColor::Green,
        DiscColor::Purple,
        DiscColor::Yellow,
        DiscColor::Blue,
        DiscColor::Red,
        DiscColor::Brown,
        DiscColor::Orange,
        DiscColor::Pink,
    ];

    /// Display name, as stored and shown to the user.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DiscColor::Black => "Black",
            DiscColor::White => "White",
            DiscColor::Green => "Green",
            DiscColor::Purple => "Purple",
            DiscColor::Yellow => "Yellow",
            DiscColor::Blue => "Blue",
            DiscColor::Red => "Red",
            DiscColor::Brown => "Brown",
            DiscColor::Orange => "Orange",
            DiscColor::Pink => "Pink",
        }
    }

    /// `(r, g, b)` web color value.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            DiscColor::Black => (0x00, 0x00, 0x00),
            DiscColor::White => (0xFF, 0xFF, 0xFF),
            DiscColor::Green => (0x00, 0x80, 0x00),
            DiscColor::Purple => (0x80, 0x00, 0x80),
            DiscColor::Yellow => (0xFF, 0xFF, 0x00),
            DiscColor::Blue => (0x00, 0x00, 0xFF),
            DiscColor::Red => (0xFF, 0x00, 0x00),
            DiscColor::Brown => (0xA5, 0x2A, 0x2A),
            DiscColor::Orange => (0xFF, 0xA5, 0x00),
            DiscColor::Pink => (0xFF, 0xC0, 0xCB),
        }
    }
}

impl std::fmt::Display for DiscColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown color name.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown color {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for DiscColor {
    type Err = UnknownColor;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Settings for a game.
///
/// ## Defaults
///
/// - 8x8 board
/// - `Player::One` moves first
/// - Player one is Black, player two is White
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_width: usize,
    pub board_height: usize,
    pub starting_player: Player,
    pub player_one_color: DiscColor,
    pub player_two_color: DiscColor,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: 8,
            board_height: 8,
            starting_player: Player::One,
            player_one_color: DiscColor::Black,
            player_two_color: DiscColor::White,
        }
    }
}

impl GameSettings {
    /// Create settings with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a square board of the given size.
    #[must_use]
    pub fn with_board_size(self, size: usize) -> Self {
        self.with_dimensions(size, size)
    }

    /// Use a `width x height` board.
    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Set both players' disc colors.
    #[must_use]
    pub fn with_colors(mut self, player_one: DiscColor, player_two: DiscColor) -> Self {
        self.player_one_color = player_one;
        self.player_two_color = player_two;
        self
    }

    /// The disc color chosen for a player.
    #[must_use]
    pub fn color_of(&self, player: Player) -> DiscColor {
        match player {
            Player::One => self.player_one_color,
            Player::Two => self.player_two_color,
        }
    }

    /// Check the board dimensions only. This is all the engine requires.
    pub fn validate_board(&self) -> Result<(), ConfigError> {
        Board::check_dimensions(self.board_width, self.board_height)
    }

    /// Check the board dimensions and that the players' colors differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_board()?;
        if self.player_one_color == self.player_two_color {
            return Err(ConfigError::DuplicateColor(self.player_one_color));
        }
        Ok(())
    }
}
