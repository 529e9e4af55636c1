//! Game constants and session configuration.
//!
//! The board shape and attempt budget are fixed. Only the reveal delay
//! and the RNG seed are configurable.
//!
//! ```
//! use memory_match::core::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "seed": 7, "reveal_delay_ms": 500 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.reveal_delay().as_millis(), 500);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of distinct symbols, and so the number of pairs on the board.
pub const PAIR_COUNT: usize = 6;

/// Number of cards on the board.
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Attempts allowed before the game is lost.
pub const MAX_ATTEMPTS: u32 = 15;

/// Default delay before an unmatched pair flips back.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1_000;

/// Longest accepted reveal delay.
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How long an unmatched pair stays face-up, in milliseconds.
    pub reveal_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the reveal delay is within bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::ZeroRevealDelay);
        }
        if self.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::RevealDelayTooLong {
                got_ms: self.reveal_delay_ms,
                max_ms: MAX_REVEAL_DELAY_MS,
            });
        }
        Ok(())
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
