//! Seeded randomness for playouts.
//!
//! The rules never consult an RNG. Random playouts in tests and benches do,
//! and must replay identically from the same seed.
//!
//! ```
//! use reversi_engine::core::{Coordinate, GameRng};
//!
//! let moves = [Coordinate::new(3, 2), Coordinate::new(2, 3)];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_move(&moves), b.pick_move(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::coord::Coordinate;

/// Golden-ratio increment spreading child seeds apart.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream remembering the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    children: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            children: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child RNG for an independent playout.
    ///
    /// The n-th child of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.children += 1;
        Self::new(self.seed.wrapping_add(self.children.wrapping_mul(SEED_STRIDE)))
    }

    /// Uniform pick from a slice, `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }

    /// Uniform pick of one legal move.
    pub fn pick_move(&mut self, moves: &[Coordinate]) -> Option<Coordinate> {
        self.choose(moves).copied()
    }
}
