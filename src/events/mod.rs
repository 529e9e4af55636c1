//! Events reported by controller mutations.

pub mod event;

pub use event::GameEvent;
