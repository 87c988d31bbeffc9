//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Coordinate, DiscColor, GameSettings, Player};

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Copy, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its number (1 or 2).
    #[new]
    fn new(number: u8) -> PyResult<Self> {
        match number {
            1 => Ok(Self(Player::One)),
            2 => Ok(Self(Player::Two)),
            n => Err(PyValueError::new_err(format!("no player {n}, expected 1 or 2"))),
        }
    }

    /// The player number (1 or 2).
    #[getter]
    fn number(&self) -> u8 {
        self.0.index() as u8 + 1
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player({})", self.number())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Coordinate.
#[pyclass(name = "Coordinate")]
#[derive(Clone, Copy, Debug)]
pub struct PyCoordinate(pub Coordinate);

#[pymethods]
impl PyCoordinate {
    #[new]
    fn new(col: i32, row: i32) -> Self {
        Self(Coordinate::new(col, row))
    }

    #[getter]
    fn col(&self) -> i32 {
        self.0.col
    }

    #[getter]
    fn row(&self) -> i32 {
        self.0.row
    }

    fn __repr__(&self) -> String {
        format!("Coordinate({}, {})", self.0.col, self.0.row)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.col as u32 as u64) << 32) | self.0.row as u32 as u64
    }
}

/// Python wrapper for GameSettings.
#[pyclass(name = "Settings")]
#[derive(Clone, Debug)]
pub struct PySettings(pub GameSettings);

#[pymethods]
impl PySettings {
    /// Create settings.
    ///
    /// # Arguments
    /// - width, height: Board dimensions (even, at least 2)
    /// - starting_player: 1 or 2
    /// - player_one_color, player_two_color: Color names, e.g. "black"
    #[new]
    #[pyo3(signature = (
        width = 8,
        height = 8,
        starting_player = 1,
        player_one_color = "black",
        player_two_color = "white"
    ))]
    fn new(
        width: usize,
        height: usize,
        starting_player: u8,
        player_one_color: &str,
        player_two_color: &str,
    ) -> PyResult<Self> {
        let player = PyPlayer::new(starting_player)?.0;
        let parse = |s: &str| {
            s.parse::<DiscColor>()
                .map_err(|e| PyValueError::new_err(e.to_string()))
        };
        let settings = GameSettings::new()
            .with_dimensions(width, height)
            .with_starting_player(player)
            .with_colors(parse(player_one_color)?, parse(player_two_color)?);
        settings
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self(settings))
    }

    /// Load settings from a file, falling back to defaults.
    #[staticmethod]
    fn load(path: &str) -> Self {
        Self(GameSettings::load_or_default(path))
    }

    /// Save settings to a file.
    fn save(&self, path: &str) -> PyResult<()> {
        self.0
            .save_to(path)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn width(&self) -> usize {
        self.0.board_width
    }

    #[getter]
    fn height(&self) -> usize {
        self.0.board_height
    }

    #[getter]
    fn starting_player(&self) -> PyPlayer {
        PyPlayer(self.0.starting_player)
    }

    /// Color name for a player, e.g. "Black".
    fn color_of(&self, player: &PyPlayer) -> &'static str {
        self.0.color_of(player.0).name()
    }

    fn __repr__(&self) -> String {
        format!(
            "Settings({}x{}, first={})",
            self.0.board_width, self.0.board_height, self.0.starting_player
        )
    }
}
