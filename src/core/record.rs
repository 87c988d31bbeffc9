//! Turn history.
//!
//! Every completed turn is recorded, whether the player placed a disc or had
//! to pass. Records carry a sequence number so that histories from different
//! sessions can be compared entry by entry.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::player::Player;

/// One entry in the turn history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnRecord {
    /// A disc was placed.
    Placed {
        player: Player,
        at: Coordinate,
        /// Number of opposing discs turned over.
        flipped: u32,
        sequence: u32,
    },
    /// The player had no legal move.
    Passed { player: Player, sequence: u32 },
}

impl TurnRecord {
    /// The player whose turn this was.
    #[must_use]
    pub fn player(&self) -> Player {
        match *self {
            TurnRecord::Placed { player, .. } | TurnRecord::Passed { player, .. } => player,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> u32 {
        match *self {
            TurnRecord::Placed { sequence, .. } | TurnRecord::Passed { sequence, .. } => sequence,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, TurnRecord::Passed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let placed = TurnRecord::Placed {
            player: Player::One,
            at: Coordinate::new(2, 3),
            flipped: 1,
            sequence: 0,
        };
        let passed = TurnRecord::Passed {
            player: Player::Two,
            sequence: 1,
        };

        assert_eq!(placed.player(), Player::One);
        assert_eq!(passed.player(), Player::Two);
        assert_eq!(placed.sequence(), 0);
        assert_eq!(passed.sequence(), 1);
        assert!(!placed.is_pass());
        assert!(passed.is_pass());
    }

    #[test]
    fn test_record_serialization() {
        let record = TurnRecord::Placed {
            player: Player::Two,
            at: Coordinate::new(5, 4),
            flipped: 3,
            sequence: 7,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
