//! Selection guards, pair comparison, and end-condition detection.
//!
//! These are pure functions over a `Session`. The controller calls them
//! and applies the result; nothing here mutates state.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, GameStatus, Session, MAX_ATTEMPTS};

/// Why a click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is being evaluated.
    Resolving,
    /// Two cards are already face-up.
    SelectionFull,
    /// The game has ended.
    GameOver,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card was already paired.
    AlreadyMatched,
    /// No card has this id.
    UnknownCard,
}

/// Result of comparing two face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    Match,
    Mismatch,
}

/// Grid positions resolved for an accepted click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pick {
    /// Position of the clicked card.
    pub position: usize,
    /// Position of the card already face-up, if this click completes a pair.
    pub partner: Option<usize>,
}

/// Check whether clicking `id` is allowed.
///
/// Guards run in a fixed order; the first failure is reported. Every
/// lookup happens here, so an accepted click can be applied without
/// further checks.
pub fn check_selection(session: &Session, id: CardId) -> Result<Pick, IgnoreReason> {
    if session.is_resolving {
        return Err(IgnoreReason::Resolving);
    }
    if session.selection.len() >= 2 {
        return Err(IgnoreReason::SelectionFull);
    }
    if session.status.is_over() {
        return Err(IgnoreReason::GameOver);
    }
    let position = session.position(id).ok_or(IgnoreReason::UnknownCard)?;
    let card = &session.cards[position];
    if !card.is_selectable() {
        return Err(if card.is_matched {
            IgnoreReason::AlreadyMatched
        } else {
            IgnoreReason::AlreadyFlipped
        });
    }
    let partner = match session.selection.first() {
        Some(&first) => Some(session.position(first).ok_or(IgnoreReason::UnknownCard)?),
        None => None,
    };
    Ok(Pick { position, partner })
}

/// Compare two cards by symbol.
#[must_use]
pub fn compare(first: &Card, second: &Card) -> PairOutcome {
    if first.symbol == second.symbol {
        PairOutcome::Match
    } else {
        PairOutcome::Mismatch
    }
}

/// Status the session should have once the current pair is resolved.
///
/// Win is checked before loss: matching the last pair on the final
/// attempt is a win.
#[must_use]
pub fn end_condition(session: &Session) -> GameStatus {
    if session.all_matched() {
        GameStatus::Won
    } else if session.attempts >= MAX_ATTEMPTS {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
