//! Card symbols.
//!
//! Six symbols, one per pair. The glyph mapping is a display helper;
//! the game itself only compares symbols for equality.

use serde::{Deserialize, Serialize};

use crate::core::PAIR_COUNT;

/// The face value shared by exactly two cards on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Apple,
    Banana,
    Cherry,
    Grape,
    Lemon,
    Melon,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Cherry,
        Symbol::Grape,
        Symbol::Lemon,
        Symbol::Melon,
    ];

    /// Glyph a renderer can show for this symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Apple => '🍎',
            Symbol::Banana => '🍌',
            Symbol::Cherry => '🍒',
            Symbol::Grape => '🍇',
            Symbol::Lemon => '🍋',
            Symbol::Melon => '🍉',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
