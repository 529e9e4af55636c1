//! Game event types.
//!
//! Events describe what a mutation did. The presentation layer drains
//! them after each action to drive animation and sound; tests use them
//! to check the order of effects.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::CardId;
use crate::resolution::ReversionTicket;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session was dealt.
    SessionStarted { epoch: u64 },

    /// A card was turned face-up.
    CardFlipped { card: CardId, symbol: Symbol },

    /// Two face-up cards matched.
    PairMatched {
        first: CardId,
        second: CardId,
        symbol: Symbol,
    },

    /// Two face-up cards did not match; a reversion is scheduled.
    PairMismatched {
        first: CardId,
        second: CardId,
        ticket: ReversionTicket,
    },

    /// An unmatched pair was turned back down.
    PairReverted { first: CardId, second: CardId },

    /// A pending reversion was dropped without firing.
    ReversionCancelled { ticket: ReversionTicket },

    /// Every pair was found.
    GameWon { attempts: u32 },

    /// The attempt budget ran out.
    GameLost { attempts: u32 },
}
