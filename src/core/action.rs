//! Player and host actions.
//!
//! Every input the controller accepts is an `Action`. Replaying the same
//! actions against a controller built with the same seed reproduces the
//! same session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use crate::resolution::ReversionTicket;

/// An input to the controller.
///
/// ```
/// use memory_match::core::{Action, CardId};
/// use std::time::Duration;
///
/// let click = Action::Select(CardId::new(3));
/// let frame = Action::Tick(Duration::from_millis(16));
/// assert_ne!(click, frame);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Click a card.
    Select(CardId),
    /// Throw the current session away and deal a new one.
    Restart,
    /// Advance the logical clock.
    Tick(Duration),
    /// Fire a reversion scheduled by an external timer.
    FireReversion(ReversionTicket),
}

/// A recorded action with its position in the log.
///
/// Only actions that changed something are recorded: ignored clicks and
/// idle ticks are no-ops, so leaving them out does not affect replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the controller's log (starts at 0).
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self { sequence, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(4, Action::Select(CardId(2)));
        assert_eq!(record.sequence, 4);
        assert_eq!(record.action, Action::Select(CardId(2)));
    }

    #[test]
    fn test_action_serde() {
        let actions = vec![
            Action::Select(CardId(1)),
            Action::Restart,
            Action::Tick(Duration::from_millis(250)),
            Action::FireReversion(ReversionTicket::new(2, 3)),
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(actions, back);
    }
}
