//! Session state.
//!
//! ## Session
//!
//! Everything a single game owns:
//! - The twelve cards, in grid order
//! - The current selection (0-2 face-up, unresolved cards)
//! - Attempts used and game status
//! - The resolving flag that blocks clicks while a pair is evaluated
//!
//! ## SessionSnapshot
//!
//! Read-only copy handed to the presentation layer. Cards live in an
//! `im::Vector`, so taking a snapshot is O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{CARD_COUNT, MAX_ATTEMPTS, PAIR_COUNT};
use super::entity::CardId;
use super::rng::GameRng;
use crate::cards::{shuffled_deck, Card};

/// Face-up, unresolved card ids. Never longer than two.
pub type Selection = SmallVec<[CardId; 2]>;

/// Game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Clicks are accepted.
    #[default]
    Playing,
    /// Every pair was found.
    Won,
    /// The attempt budget ran out first.
    Lost,
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// State of one game, from deal to restart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Which deal this is. Bumped by every initialize.
    pub epoch: u64,

    /// Cards in grid order.
    pub cards: Vector<Card>,

    /// Current selection.
    pub selection: Selection,

    /// Completed pair evaluations.
    pub attempts: u32,

    /// Playing, won, or lost.
    pub status: GameStatus,

    /// A pair is being evaluated; clicks are ignored.
    pub is_resolving: bool,

    /// Card id -> grid position.
    positions: FxHashMap<CardId, usize>,
}

impl Session {
    /// Deal a fresh session: twelve shuffled cards, nothing selected.
    #[must_use]
    pub fn initialize(rng: &mut GameRng, epoch: u64) -> Self {
        Self::from_cards(epoch, shuffled_deck(rng))
    }

    /// Build a playing session from cards in grid order.
    #[must_use]
    pub fn from_cards(epoch: u64, cards: Vec<Card>) -> Self {
        let positions = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self {
            epoch,
            cards: cards.into_iter().collect(),
            selection: Selection::new(),
            attempts: 0,
            status: GameStatus::Playing,
            is_resolving: false,
            positions,
        }
    }

    /// Grid position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|i| self.cards.get(i))
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = self.position(id)?;
        self.cards.get_mut(index)
    }

    /// Card ids in grid order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Are all cards matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.len() == CARD_COUNT && self.cards.iter().all(|c| c.is_matched)
    }

    /// Attempts left before the game is lost.
    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Read-only copy for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            epoch: self.epoch,
            cards: self.cards.clone(),
            selection: self.selection.clone(),
            attempts: self.attempts,
            attempts_remaining: self.attempts_remaining(),
            matched_pairs: self.matched_pairs(),
            total_pairs: PAIR_COUNT,
            status: self.status,
            is_resolving: self.is_resolving,
        }
    }
}

/// Read-only view of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub epoch: u64,
    pub cards: Vector<Card>,
    pub selection: Selection,
    pub attempts: u32,
    pub attempts_remaining: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub status: GameStatus,
    pub is_resolving: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, is_well_formed};

    #[test]
    fn test_initialize() {
        let mut rng = GameRng::new(42);
        let session = Session::initialize(&mut rng, 1);

        assert_eq!(session.epoch, 1);
        let cards: Vec<Card> = session.cards.iter().cloned().collect();
        assert!(is_well_formed(&cards));
        assert!(session.selection.is_empty());
        assert_eq!(session.attempts, 0);
        assert_eq!(session.status, GameStatus::Playing);
        assert!(!session.is_resolving);
        assert!(session.cards.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_positions_follow_grid_order() {
        let mut rng = GameRng::new(3);
        let session = Session::initialize(&mut rng, 0);

        for (i, card) in session.cards.iter().enumerate() {
            assert_eq!(session.position(card.id), Some(i));
            assert_eq!(session.card(card.id), Some(card));
        }
        assert_eq!(session.card(CardId(99)), None);
    }

    #[test]
    fn test_card_mut() {
        let mut session = Session::from_cards(0, build_deck());
        session.card_mut(CardId(4)).unwrap().flip_up();
        assert!(session.card(CardId(4)).unwrap().is_flipped);
        assert!(session.card_mut(CardId(12)).is_none());
    }

    #[test]
    fn test_matched_pairs_and_all_matched() {
        let mut session = Session::from_cards(0, build_deck());
        assert_eq!(session.matched_pairs(), 0);

        for id in 0..4 {
            session.card_mut(CardId(id)).unwrap().mark_matched();
        }
        assert_eq!(session.matched_pairs(), 2);
        assert!(!session.all_matched());

        for id in 4..12 {
            session.card_mut(CardId(id)).unwrap().mark_matched();
        }
        assert!(session.all_matched());
    }

    #[test]
    fn test_snapshot() {
        let mut session = Session::from_cards(2, build_deck());
        session.attempts = 4;
        let snapshot = session.snapshot();

        assert_eq!(snapshot.epoch, 2);
        assert_eq!(snapshot.cards.len(), CARD_COUNT);
        assert_eq!(snapshot.attempts, 4);
        assert_eq!(snapshot.attempts_remaining, MAX_ATTEMPTS - 4);
        assert_eq!(snapshot.total_pairs, PAIR_COUNT);
        assert_eq!(snapshot.status, GameStatus::Playing);

        // Snapshot is detached from later mutation
        session.card_mut(CardId(0)).unwrap().flip_up();
        assert!(!snapshot.cards.iter().any(|c| c.is_flipped));
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::from_cards(0, build_deck());
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "Playing");
        assert_eq!(json["cards"].as_array().unwrap().len(), CARD_COUNT);
        assert_eq!(json["attempts_remaining"], MAX_ATTEMPTS);
    }
}
