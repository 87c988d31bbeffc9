//! Cell contents.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// The occupant of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    /// Disc of `Player::One`.
    Black,
    /// Disc of `Player::Two`.
    White,
}

impl Mark {
    /// The player owning a disc of this mark, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Black => Some(Player::One),
            Mark::White => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Character used in the board's text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Black => 'B',
            Mark::White => 'W',
        }
    }

    /// Inverse of [`Mark::symbol`].
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Mark::Empty),
            'B' => Some(Mark::Black),
            'W' => Some(Mark::White),
            _ => None,
        }
    }
}
