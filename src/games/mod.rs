//! Game implementations.

pub mod reversi;
