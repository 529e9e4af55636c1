//! Game rules.
//!
//! - Which clicks are accepted
//! - Whether two face-up cards match
//! - When the game is won or lost

pub mod engine;

pub use engine::{check_selection, compare, end_condition, IgnoreReason, PairOutcome, Pick};
