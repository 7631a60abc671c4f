//! Session configuration.
//!
//! Per-game rules live in `rules::GameRules`. This is the configuration of a
//! single playing session: which seed to deal from and whether the game is
//! driven by a person or by the built-in demo player.

use serde::{Deserialize, Serialize};

/// Default number of moves after which demo play may no longer redeal.
pub const DEFAULT_MOVE_CEILING: u32 = 100;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the initial shuffle.
    /// Same seed produces the same deal.
    pub seed: u64,

    /// Non-interactive simulation (demo) mode.
    pub demo: bool,

    /// Move count at which demo play stops redealing.
    /// Ignored when `demo` is false.
    pub move_ceiling: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            demo: false,
            move_ceiling: DEFAULT_MOVE_CEILING,
        }
    }
}

impl SessionConfig {
    /// Deal from game number `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Switch to demo mode.
    #[must_use]
    pub fn demo(mut self) -> Self {
        self.demo = true;
        self
    }

    /// Stop demo redeals after `ceiling` moves.
    #[must_use]
    pub fn with_move_ceiling(mut self, ceiling: u32) -> Self {
        self.move_ceiling = ceiling;
        self
    }

    /// Has a demo session run out of moves?
    #[must_use]
    pub fn ceiling_reached(&self, moves: u32) -> bool {
        self.demo && moves >= self.move_ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, 42);
        assert!(!config.demo);
        assert_eq!(config.move_ceiling, 100);
    }

    #[test]
    fn test_ceiling_only_applies_to_demo() {
        let interactive = SessionConfig::default();
        assert!(!interactive.ceiling_reached(10_000));

        let demo = SessionConfig::default().demo().with_move_ceiling(5);
        assert!(!demo.ceiling_reached(4));
        assert!(demo.ceiling_reached(5));
    }
}
