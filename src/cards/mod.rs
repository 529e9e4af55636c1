//! Symbols, cards, and deck construction.

pub mod deck;
pub mod instance;
pub mod symbol;

pub use deck::{build_deck, is_well_formed, shuffled_deck, symbol_counts};
pub use instance::Card;
pub use symbol::Symbol;
