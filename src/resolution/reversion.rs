//! Single-slot reversion timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ReversionTicket, ResolutionStatus};
use crate::core::CardId;

/// A scheduled reversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReversion {
    /// Identifies this reversion.
    pub ticket: ReversionTicket,
    /// The unmatched pair to turn back down.
    pub cards: [CardId; 2],
    /// Time left on the logical clock.
    pub remaining: Duration,
}

/// Holds the one outstanding reversion.
///
/// ## Behavior
///
/// - `schedule()`: Replaces any pending reversion, returns the new ticket
/// - `advance()`: Counts down; returns the reversion once it is due
/// - `take()`: Fires immediately if the ticket is current
/// - `reset()`: Cancels and moves to a new epoch (restart)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReversionTimer {
    epoch: u64,
    next_sequence: u32,
    pending: Option<PendingReversion>,
}

impl ReversionTimer {
    /// Create an idle timer for a session epoch.
    #[must_use]
    pub fn new(epoch: u64) -> Self {
        Self {
            epoch,
            next_sequence: 0,
            pending: None,
        }
    }

    /// Epoch tickets are issued for.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> ResolutionStatus {
        match &self.pending {
            Some(p) => ResolutionStatus::Pending(p.ticket),
            None => ResolutionStatus::Idle,
        }
    }

    /// The pending reversion, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingReversion> {
        self.pending.as_ref()
    }

    /// Schedule a reversion of `cards` after `delay`.
    ///
    /// A reversion that is already pending is cancelled first.
    pub fn schedule(&mut self, cards: [CardId; 2], delay: Duration) -> ReversionTicket {
        if let Some(stale) = self.cancel() {
            tracing::debug!(ticket = %stale.ticket, "Replaced pending reversion");
        }

        let ticket = ReversionTicket::new(self.epoch, self.next_sequence);
        self.next_sequence += 1;
        self.pending = Some(PendingReversion {
            ticket,
            cards,
            remaining: delay,
        });
        ticket
    }

    /// Cancel the pending reversion, returning it.
    pub fn cancel(&mut self) -> Option<PendingReversion> {
        self.pending.take()
    }

    /// Advance the logical clock by `elapsed`.
    ///
    /// Returns the reversion if its delay has fully elapsed.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PendingReversion> {
        let pending = self.pending.as_mut()?;
        pending.remaining = pending.remaining.saturating_sub(elapsed);
        if pending.remaining.is_zero() {
            self.pending.take()
        } else {
            None
        }
    }

    /// Fire the reversion for `ticket` now.
    ///
    /// Returns `None` if the ticket is stale: from another epoch, already
    /// fired, or cancelled.
    pub fn take(&mut self, ticket: ReversionTicket) -> Option<PendingReversion> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take(),
            _ => None,
        }
    }

    /// Cancel anything pending and start issuing tickets for `epoch`.
    pub fn reset(&mut self, epoch: u64) -> Option<PendingReversion> {
        let cancelled = self.cancel();
        self.epoch = epoch;
        self.next_sequence = 0;
        cancelled
    }
}
