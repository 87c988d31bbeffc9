//! Score counter.

use serde::{Deserialize, Serialize};

/// A non-negative counter, reset and rebuilt from the board after every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counter {
    count: u32,
}

impl Counter {
    /// Create a counter starting at `init`.
    #[must_use]
    pub const fn new(init: u32) -> Self {
        Self { count: init }
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.count
    }

    /// Reset the counter to 0.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Raise the count by one.
    pub fn raise(&mut self) {
        self.count += 1;
    }
}
