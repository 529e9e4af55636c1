//! Card identification.
//!
//! Every card in a session has a unique `CardId`. Ids are allocated
//! `0..CARD_COUNT` when the deck is built, before it is shuffled, so an
//! id says nothing about where the card sits in the grid.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let id = CardId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(id.to_string(), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one session.
///
/// Ids are only meaningful for the session that issued them. After a
/// restart the same raw value names a different card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
