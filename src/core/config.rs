//! Session configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cards dealt to each side at game start.
pub const HAND_SIZE: usize = 8;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Default pause before the opponent's move is applied.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws from OS entropy.
    /// Same seed produces the same deal.
    pub seed: Option<u64>,

    /// Delay the boundary should wait before resolving an opponent ticket.
    /// Purely cosmetic; tests resolve immediately.
    pub thinking_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }
}

impl GameConfig {
    /// Use a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom thinking delay.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }
}
