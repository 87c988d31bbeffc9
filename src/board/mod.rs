//! The Reversi grid.
//!
//! A `Board` is a fixed `width x height` rectangle of [`Mark`]s stored
//! row-major. It owns no game logic beyond get/set and counting; legality and
//! flipping live in `rules`.
//!
//! ## Starting cross
//!
//! A new board is empty apart from four discs around the centre. With
//! `cw = width / 2` and `ch = height / 2`:
//!
//! ```text
//!   (cw-1, ch-1) W   (cw, ch-1) B
//!   (cw-1, ch)   B   (cw, ch)   W
//! ```
//!
//! ## Text form
//!
//! `Display` and `FromStr` use one line per row with `.`, `B` and `W`:
//!
//! ```
//! use reversi_engine::board::Board;
//!
//! let board = Board::new(4, 4).unwrap();
//! assert_eq!(board.to_string(), "....\n.WB.\n.BW.\n....");
//! assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
//! ```

mod cell;

pub use cell::Mark;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::core::error::{BoardError, BoardParseError, ConfigError};
use crate::core::Coordinate;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 256;

/// Rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create a board with the starting cross placed at the centre.
    ///
    /// Both dimensions must be even and at least 2.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::check_dimensions(width, height)?;

        let mut board = Self::empty(width, height);
        let (cw, ch) = ((width / 2) as i32, (height / 2) as i32);
        for (col, row, mark) in [
            (cw, ch, Mark::White),
            (cw - 1, ch - 1, Mark::White),
            (cw - 1, ch, Mark::Black),
            (cw, ch - 1, Mark::Black),
        ] {
            let idx = board.index(Coordinate::new(col, row));
            board.cells[idx] = mark;
        }
        Ok(board)
    }

    /// Validate dimensions for a new game board: both even, from 2 up to
    /// [`MAX_DIMENSION`].
    pub fn check_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
        if width < 2 || height < 2 {
            return Err(ConfigError::DimensionTooSmall { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(ConfigError::OddDimension { width, height });
        }
        Self::check_fits(width, height)
    }

    fn check_fits(width: usize, height: usize) -> Result<(), ConfigError> {
        if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
            Ok(())
        } else {
            Err(ConfigError::DimensionTooLarge { width, height })
        }
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Mark::Empty; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the coordinate inside the grid?
    #[must_use]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.col >= 0 && at.row >= 0 && (at.col as usize) < self.width && (at.row as usize) < self.height
    }

    /// Row-major index. Caller must have checked `contains`.
    fn index(&self, at: Coordinate) -> usize {
        at.row as usize * self.width + at.col as usize
    }

    fn out_of_bounds(&self, at: Coordinate) -> BoardError {
        BoardError::OutOfBounds {
            coord: at,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the mark at a coordinate.
    pub fn get(&self, at: Coordinate) -> Result<Mark, BoardError> {
        self.mark_at(at).ok_or_else(|| self.out_of_bounds(at))
    }

    /// Set the mark at a coordinate.
    pub fn set(&mut self, at: Coordinate, mark: Mark) -> Result<(), BoardError> {
        if !self.contains(at) {
            return Err(self.out_of_bounds(at));
        }
        let idx = self.index(at);
        self.cells[idx] = mark;
        Ok(())
    }

    /// Get the mark at a coordinate, or `None` off the board.
    #[must_use]
    pub fn mark_at(&self, at: Coordinate) -> Option<Mark> {
        self.contains(at).then(|| self.cells[self.index(at)])
    }

    /// Count cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |row| (0..width).map(move |col| Coordinate::new(col, row)))
    }

    /// Iterate over `(coordinate, mark)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Mark)> + '_ {
        self.coordinates().zip(self.cells.iter().copied())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse the text form. Any non-empty rectangle is accepted, so positions
    /// that cannot arise from a standard start can still be described.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().ok_or(BoardParseError::Empty)?.chars().count();
        let height = rows.len();
        Self::check_fits(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BoardParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for c in line.chars() {
                cells.push(Mark::from_symbol(c).ok_or(BoardParseError::BadChar(c))?);
            }
        }

        Ok(Self { width, height, cells })
    }
}
