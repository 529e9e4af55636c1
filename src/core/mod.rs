//! Core types: card ids, RNG, configuration, actions, session state.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    SessionConfig, CARD_COUNT, DEFAULT_REVEAL_DELAY_MS, MAX_ATTEMPTS, MAX_REVEAL_DELAY_MS, PAIR_COUNT,
};
pub use entity::CardId;
pub use error::ConfigError;
pub use rng::GameRng;
pub use state::{GameStatus, Selection, Session, SessionSnapshot};
