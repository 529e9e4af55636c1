//! Error types.
//!
//! Gameplay never fails: invalid selections are ignored, not reported as
//! errors. The only fallible step is building a controller from
//! configuration.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reveal delay of zero
    #[error("Reveal delay must be at least 1 ms")]
    ZeroRevealDelay,

    /// Reveal delay above the ceiling
    #[error("Reveal delay too long: {got_ms} ms (maximum {max_ms} ms)")]
    RevealDelayTooLong { got_ms: u64, max_ms: u64 },

    /// Malformed JSON configuration
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
