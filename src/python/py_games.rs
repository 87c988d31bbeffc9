//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Mark;
use crate::games::reversi::Game;
use crate::rules::GameResult;

use super::py_core::{PyCoordinate, PyPlayer, PySettings};

/// Python wrapper for a Reversi session.
#[pyclass(name = "ReversiGame")]
#[derive(Default)]
pub struct PyReversiGame {
    game: Game,
}

#[pymethods]
impl PyReversiGame {
    /// Create an inert session. Call `initialize` then `start`.
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Build a fresh board from the settings.
    fn initialize(&mut self, settings: &PySettings) -> PyResult<()> {
        self.game
            .initialize(&settings.0)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn start(&mut self) {
        self.game.start();
    }

    /// Play for the player to move. Returns False if the move was rejected.
    fn play_move(&mut self, at: &PyCoordinate) -> bool {
        self.game.play_move(at.0)
    }

    fn end_game(&mut self) {
        self.game.end_game();
    }

    #[getter]
    fn is_active(&self) -> bool {
        self.game.is_active()
    }

    #[getter]
    fn width(&self) -> Option<usize> {
        self.game.width()
    }

    #[getter]
    fn height(&self) -> Option<usize> {
        self.game.height()
    }

    fn current_turn(&self) -> Option<PyPlayer> {
        self.game.current_turn().map(PyPlayer)
    }

    /// Owner of the disc at `at`, or None for an empty or off-board cell.
    fn owner_at(&self, at: &PyCoordinate) -> Option<PyPlayer> {
        self.game.mark(at.0).and_then(Mark::owner).map(PyPlayer)
    }

    fn legal_moves(&self) -> Vec<PyCoordinate> {
        self.game.legal_moves().iter().copied().map(PyCoordinate).collect()
    }

    fn score(&self, player: &PyPlayer) -> u32 {
        self.game.score(player.0)
    }

    fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// The winner once the game is over. None while playing or on a draw.
    fn winner(&self) -> Option<PyPlayer> {
        match self.game.result() {
            Some(GameResult::Winner(p)) => Some(PyPlayer(p)),
            _ => None,
        }
    }

    /// Has `player` won a finished game?
    fn has_won(&self, player: &PyPlayer) -> bool {
        self.game.result().is_some_and(|r| r.is_winner(player.0))
    }

    fn is_draw(&self) -> bool {
        self.game.result() == Some(GameResult::Draw)
    }

    fn __repr__(&self) -> String {
        let status = match (self.game.is_active(), self.game.result()) {
            (_, Some(result)) => result.to_string(),
            (true, None) => "ongoing".to_string(),
            (false, None) => "inactive".to_string(),
        };
        format!("ReversiGame(status={status})")
    }

    fn __str__(&self) -> String {
        self.game
            .board()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
