//! Match configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the arena runs each game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Completed turns after which the game is a draw.
    pub max_turns: u32,

    /// Random substitutions each player may use per game.
    pub fallback_budget: u32,

    /// Deadline handed to the agent for each move request.
    pub move_time_limit_ms: u64,

    /// A move taking longer than this counts as a timeout in the statistics.
    pub timeout_threshold_ms: u64,

    /// Seed for fallback substitutions. Benchmarks fork one stream per game.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 100,
            fallback_budget: 5,
            move_time_limit_ms: 900,
            timeout_threshold_ms: 900,
            seed: 0,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    #[must_use]
    pub fn with_fallback_budget(mut self, budget: u32) -> Self {
        self.fallback_budget = budget;
        self
    }

    #[must_use]
    pub fn with_move_time_limit_ms(mut self, ms: u64) -> Self {
        self.move_time_limit_ms = ms;
        self
    }

    #[must_use]
    pub fn with_timeout_threshold_ms(mut self, ms: u64) -> Self {
        self.timeout_threshold_ms = ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn move_time_limit(&self) -> Duration {
        Duration::from_millis(self.move_time_limit_ms)
    }

    pub fn timeout_threshold(&self) -> Duration {
        Duration::from_millis(self.timeout_threshold_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::Validation(
                "matches.max_turns must be > 0".into(),
            ));
        }
        if self.move_time_limit_ms == 0 {
            return Err(ConfigError::Validation(
                "matches.move_time_limit_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
