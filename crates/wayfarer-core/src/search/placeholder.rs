//! Suggested-query placeholder rotation.
//!
//! While the search box is empty the view cycles a displayed placeholder
//! through a fixed set of suggested queries on a fixed interval. This type
//! holds only the rotation state; the timer itself lives in the view and is
//! cancelled when the view is torn down.

use std::time::Duration;

/// The fixed rotation of suggested queries.
pub const SUGGESTED_QUERIES: [&str; 3] = [
    "I want a 2 bed, 1 bath place under $250",
    "Show me rentals for 4 guests with strong reviews",
    "Find a private room with wifi and kitchen",
];

/// How often the displayed placeholder advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3500);

/// Cyclic index into [`SUGGESTED_QUERIES`].
#[derive(Debug, Default)]
pub struct PlaceholderRotation {
    index: usize,
}

impl PlaceholderRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed suggestion.
    pub fn current(&self) -> &'static str {
        SUGGESTED_QUERIES[self.index]
    }

    /// Advance to the next suggestion, wrapping around.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % SUGGESTED_QUERIES.len();
    }

    /// Reset to the first suggestion (the user started typing).
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
