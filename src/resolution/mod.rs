//! Deferred reversion of unmatched pairs.
//!
//! When two face-up cards do not match, they stay visible for the reveal
//! delay and are then turned back down. At most one reversion is pending
//! at a time.
//!
//! ## Driving time
//!
//! The crate has no event loop. A host delivers time either by
//! advancing the logical clock (`ReversionTimer::advance`) or by running
//! its own timer and firing the reversion by ticket (`ReversionTimer::take`).
//!
//! ```
//! use memory_match::core::CardId;
//! use memory_match::resolution::{ReversionTimer, ResolutionStatus};
//! use std::time::Duration;
//!
//! let mut timer = ReversionTimer::new(1);
//! let ticket = timer.schedule([CardId(0), CardId(5)], Duration::from_millis(800));
//! assert_eq!(timer.status(), ResolutionStatus::Pending(ticket));
//!
//! assert!(timer.advance(Duration::from_millis(500)).is_none());
//! let due = timer.advance(Duration::from_millis(300)).unwrap();
//! assert_eq!(due.cards, [CardId(0), CardId(5)]);
//! assert_eq!(timer.status(), ResolutionStatus::Idle);
//! ```

mod reversion;

pub use reversion::{PendingReversion, ReversionTimer};

use serde::{Deserialize, Serialize};

/// Identifies one scheduled reversion.
///
/// Carries the session epoch, so a ticket from a previous deal never
/// matches a reversion in the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReversionTicket {
    /// Session the reversion belongs to.
    pub epoch: u64,
    /// Order within the session.
    pub sequence: u32,
}

impl ReversionTicket {
    /// Create a ticket.
    #[must_use]
    pub const fn new(epoch: u64, sequence: u32) -> Self {
        Self { epoch, sequence }
    }
}

impl std::fmt::Display for ReversionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reversion({}.{})", self.epoch, self.sequence)
    }
}

/// Whether a reversion is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Nothing pending.
    Idle,
    /// A reversion is waiting on its delay.
    Pending(ReversionTicket),
}
