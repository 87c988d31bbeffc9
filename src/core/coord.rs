//! Board coordinates and compass directions.
//!
//! ## Coordinate
//!
//! A `(col, row)` pair of signed integers. Coordinates may point off the
//! board while scanning outward, so they are never clamped; the `Board`
//! decides what is in range.
//!
//! ## Direction
//!
//! The eight compass directions, iterated in a fixed order
//! (N, NE, E, SE, S, SW, W, NW). `col` grows East and `row` grows South.

use serde::{Deserialize, Serialize};

/// A position on the board, compared by value.
///
/// ```
/// use reversi_engine::core::{Coordinate, Direction};
///
/// let c = Coordinate::new(3, 4);
/// assert_eq!(c.step(Direction::North), Coordinate::new(3, 3));
/// assert_eq!(c, Coordinate::from((3, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, 0-based, growing East.
    pub col: i32,
    /// Row, 0-based, growing South.
    pub row: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring coordinate one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        self.offset(dir, 1)
    }

    /// The coordinate `distance` steps away in `dir`.
    #[must_use]
    pub const fn offset(self, dir: Direction, distance: i32) -> Self {
        let (dc, dr) = dir.offset();
        Self {
            col: self.col + dc * distance,
            row: self.row + dr * distance,
        }
    }

    /// Walk outward from (but not including) this coordinate in `dir`.
    ///
    /// The iterator is unbounded; callers stop it at the board edge.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Coordinate> {
        (1..).map(move |d| self.offset(dir, d))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(value: Coordinate) -> Self {
        (value.col, value.row)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Unit `(dcol, drow)` offsets, indexed by `Direction as usize`.
const OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The unit `(dcol, drow)` offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        OFFSETS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_coordinate_equality_is_structural() {
        let a = Coordinate::new(2, 3);
        let b = Coordinate::from((2, 3));
        assert_eq!(a, b);
        assert_ne!(a, Coordinate::new(3, 2));

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_direction_offsets_are_exhaustive() {
        let offsets: HashSet<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets.len(), 8);

        for dc in -1..=1 {
            for dr in -1..=1 {
                if (dc, dr) != (0, 0) {
                    assert!(offsets.contains(&(dc, dr)), "missing offset ({dc}, {dr})");
                }
            }
        }
    }

    #[test]
    fn test_direction_order() {
        assert_eq!(Direction::ALL[0], Direction::North);
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::South.offset(), (0, 1));
        assert_eq!(Direction::West.offset(), (-1, 0));
        assert_eq!(Direction::NorthWest.offset(), (-1, -1));
    }

    #[test]
    fn test_step_and_offset() {
        let c = Coordinate::new(4, 4);
        assert_eq!(c.step(Direction::NorthEast), Coordinate::new(5, 3));
        assert_eq!(c.offset(Direction::SouthWest, 3), Coordinate::new(1, 7));
        assert_eq!(Coordinate::new(0, 0).step(Direction::West), Coordinate::new(-1, 0));
    }

    #[test]
    fn test_ray() {
        let ray: Vec<_> = Coordinate::new(1, 1).ray(Direction::South).take(3).collect();
        assert_eq!(
            ray,
            vec![Coordinate::new(1, 2), Coordinate::new(1, 3), Coordinate::new(1, 4)]
        );
    }

    #[test]
    fn test_coordinate_display_and_serde() {
        let c = Coordinate::new(2, 5);
        assert_eq!(format!("{}", c), "(2, 5)");

        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
