//! Python bindings for the reversi-engine session.
//!
//! These bindings expose the command/query surface of [`Game`](crate::Game)
//! so a Python front end can drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import reversi_engine as rv
//!
//! settings = rv.Settings(width=8, height=8)
//! game = rv.ReversiGame()
//! game.initialize(settings)
//! game.start()
//!
//! game.play_move(rv.Coordinate(2, 3))
//! print(game.score(rv.Player(1)), game.current_turn())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// reversi_engine: A Reversi rules engine and game session.
#[pymodule]
fn reversi_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyCoordinate>()?;
    m.add_class::<PySettings>()?;

    // Games
    m.add_class::<PyReversiGame>()?;

    Ok(())
}
