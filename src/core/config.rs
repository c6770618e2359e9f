//! Rule configuration.
//!
//! The ruleset is fixed Klondike (foundations ace-up, tableaux alternating
//! color descending) except for the stock draw count, which varies between
//! common house rules. Draw count is configured at session start rather
//! than hardcoded.

use serde::{Deserialize, Serialize};

/// Default number of cards drawn per stock click (draw-three Klondike).
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Rule parameters for a game session.
///
/// ## Example
///
/// ```
/// use klondike_core::GameConfig;
///
/// let draw_three = GameConfig::default();
/// assert_eq!(draw_three.draw_count, 3);
///
/// let draw_one = GameConfig::default().with_draw_count(1);
/// assert_eq!(draw_one.draw_count, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards moved stock → waste per draw. Must be at least 1.
    pub draw_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
        }
    }
}

impl GameConfig {
    /// Create the default draw-three configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stock draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: usize) -> Self {
        assert!(draw_count > 0, "draw count must be at least 1");
        self.draw_count = draw_count;
        self
    }
}
