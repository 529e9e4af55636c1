//! Deck construction.
//!
//! A deck is every symbol twice, ids assigned in build order, then
//! shuffled. Ids are stable for the session; grid positions are not
//! derivable from them.

use rustc_hash::FxHashMap;

use super::instance::Card;
use super::symbol::Symbol;
use crate::core::{CardId, GameRng, CARD_COUNT};

/// Build the twelve cards in id order, unshuffled.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    Symbol::ALL
        .iter()
        .flat_map(|&symbol| [symbol, symbol])
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol))
        .collect()
}

/// Build and shuffle a deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = build_deck();
    rng.shuffle(&mut cards);
    cards
}

/// Count how many cards carry each symbol.
#[must_use]
pub fn symbol_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.symbol).or_insert(0) += 1;
    }
    counts
}

/// Twelve cards, every symbol exactly twice, no duplicate ids.
#[must_use]
pub fn is_well_formed(cards: &[Card]) -> bool {
    if cards.len() != CARD_COUNT {
        return false;
    }
    let counts = symbol_counts(cards);
    let pairs_ok = Symbol::ALL.iter().all(|s| counts.get(s) == Some(&2));

    let mut ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();

    pairs_ok && ids.len() == CARD_COUNT
}
