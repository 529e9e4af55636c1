//! Card instances: one face-down/face-up card on the board.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::CardId;

/// A card in a session.
///
/// `is_matched` implies `is_flipped`: a matched card stays face-up for
/// the rest of the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the session.
    pub id: CardId,

    /// Face value.
    pub symbol: Symbol,

    /// Is the card currently face-up?
    pub is_flipped: bool,

    /// Has the card been paired with its twin?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Can this card be selected? Face-down cards only.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Turn the card face-up.
    pub fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Turn the card face-down. Matched cards stay up.
    pub fn flip_down(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    /// Mark the card as matched (and face-up).
    pub fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }
}
