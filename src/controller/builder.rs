//! Controller construction.

use std::time::Duration;

use super::game::GameController;
use crate::core::{ConfigError, SessionConfig};

/// Builder for a `GameController`.
#[derive(Clone, Debug, Default)]
pub struct GameControllerBuilder {
    config: SessionConfig,
}

impl GameControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed for reproducible deals.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// How long an unmatched pair stays face-up.
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Validate the configuration and deal the first session.
    pub fn build(self) -> Result<GameController, ConfigError> {
        self.config.validate()?;
        Ok(GameController::from_config(self.config))
    }
}
