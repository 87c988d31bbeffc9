//! Rules engine trait and flip scanning.
//!
//! `RulesEngine` implementors decide legality and placement effects; the
//! trait supplies turn passing, end-of-game detection and scoring on top.
//! The `flips` module holds the directional scans the Reversi rules use.

pub mod engine;
pub mod flips;

pub use engine::{GameResult, RulesEngine};
pub use flips::{flips, is_legal_placement, run_length, FlipList};
