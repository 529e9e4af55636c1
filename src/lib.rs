//! # memory-match
//!
//! Game-state core for a memory matching card game: twelve face-down
//! cards (six symbol pairs), click to flip, fifteen attempts to find
//! every pair.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, no event loop. A host (browser
//!    front end, terminal, test harness) reads snapshots and feeds actions.
//!
//! 2. **Silent Guards**: Invalid clicks are no-ops, never errors.
//!
//! 3. **Deterministic**: Seeded ChaCha8 shuffles; the same seed and the
//!    same actions give the same game.
//!
//! ## Architecture
//!
//! - **Single Owner**: `GameController` owns the session and is the only
//!   code that mutates it.
//!
//! - **Ticketed Reversion**: An unmatched pair reverts after a delay. The
//!   one pending reversion carries the session epoch, so restarting can
//!   never be undone by a stale timer.
//!
//! - **Persistent Data Structures**: Cards live in an `im::Vector`, so
//!   snapshots are O(1) clones.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, actions, session state
//! - `cards`: Symbols, cards, deck construction
//! - `rules`: Selection guards, pair comparison, end condition
//! - `resolution`: Deferred reversion timer
//! - `events`: Events reported by each mutation
//! - `controller`: The game-state controller

pub mod cards;
pub mod controller;
pub mod core;
pub mod events;
pub mod resolution;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardId, ConfigError, GameRng, GameStatus, Selection,
    Session, SessionConfig, SessionSnapshot, CARD_COUNT, MAX_ATTEMPTS, PAIR_COUNT,
};

pub use crate::cards::{Card, Symbol};

pub use crate::rules::{IgnoreReason, PairOutcome};

pub use crate::resolution::{PendingReversion, ResolutionStatus, ReversionTicket, ReversionTimer};

pub use crate::events::GameEvent;

pub use crate::controller::{GameController, GameControllerBuilder, SelectOutcome};
