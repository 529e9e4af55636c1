//! Game controller implementation.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::builder::GameControllerBuilder;
use crate::core::{
    Action, ActionRecord, CardId, ConfigError, GameRng, GameStatus, Session, SessionConfig,
    SessionSnapshot,
};
use crate::events::GameEvent;
use crate::resolution::{PendingReversion, ReversionTicket, ReversionTimer};
use crate::rules::{self, IgnoreReason, PairOutcome};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Flipped,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; the pair reverts when the ticket fires.
    Mismatched(ReversionTicket),
}

/// Owns the session and every mutation of it.
#[derive(Clone, Debug)]
pub struct GameController {
    config: SessionConfig,
    rng: GameRng,
    session: Session,
    timer: ReversionTimer,
    history: Vector<ActionRecord>,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Start configuring a controller.
    pub fn builder() -> GameControllerBuilder {
        GameControllerBuilder::new()
    }

    /// Build from a configuration, validating it first.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        GameControllerBuilder::new().config(config).build()
    }

    /// Build and deal from an already validated configuration.
    pub(crate) fn from_config(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), reveal_delay_ms = config.reveal_delay_ms, "Created controller");

        let mut controller = Self {
            config,
            rng,
            session: Session::from_cards(0, Vec::new()),
            timer: ReversionTimer::new(0),
            history: Vector::new(),
            events: Vec::new(),
        };
        controller.initialize();
        controller
    }

    /// Replay recorded actions against a fresh controller.
    ///
    /// With a fixed seed the result matches the controller that
    /// produced the actions.
    pub fn replay<'a>(
        config: SessionConfig,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<Self, ConfigError> {
        let mut controller = Self::new(config)?;
        for action in actions {
            controller.apply(*action);
        }
        Ok(controller)
    }

    // === Accessors ===

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Root RNG seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The live session, read-only.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// An owned read-only copy of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    /// The outstanding reversion, if any.
    #[must_use]
    pub fn pending_reversion(&self) -> Option<&PendingReversion> {
        self.timer.pending()
    }

    /// Actions that changed the current session, oldest first.
    ///
    /// Cleared by every deal. Replaying the first session's log on a
    /// fresh controller with the same seed reproduces it.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Drain the events produced since the last call.
    ///
    /// Undrained events from a previous session are dropped on restart.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Actions ===

    /// Dispatch an action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(id) => {
                self.select_card(id);
            }
            Action::Restart => self.restart(),
            Action::Tick(elapsed) => {
                self.tick(elapsed);
            }
            Action::FireReversion(ticket) => {
                self.fire_reversion(ticket);
            }
        }
    }

    /// Click a card.
    ///
    /// Silently ignored (session untouched) while a pair is resolving,
    /// when two cards are already up, after the game ends, or when the
    /// card is face-up, matched, or unknown.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let pick = match rules::check_selection(&self.session, id) {
            Ok(pick) => pick,
            Err(reason) => {
                tracing::trace!(card = %id, ?reason, "Ignored selection");
                return SelectOutcome::Ignored(reason);
            }
        };
        self.record(Action::Select(id));

        let card = &mut self.session.cards[pick.position];
        card.flip_up();
        let symbol = card.symbol;
        self.session.selection.push(id);
        tracing::debug!(card = %id, ?symbol, "Flipped card");
        self.events.push(GameEvent::CardFlipped { card: id, symbol });

        match pick.partner {
            Some(partner) => self.evaluate_match(partner, pick.position),
            None => SelectOutcome::Flipped,
        }
    }

    /// Deal a new session, cancelling any pending reversion.
    pub fn restart(&mut self) {
        self.initialize();
    }

    /// Advance the logical clock.
    ///
    /// Returns `true` if a reversion fired.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.timer.pending().is_none() {
            return false;
        }
        self.record_tick(elapsed);

        match self.timer.advance(elapsed) {
            Some(due) => {
                self.revert(due);
                true
            }
            None => false,
        }
    }

    /// Fire a reversion now, for hosts running their own timer.
    ///
    /// Stale tickets (previous session, already fired, replaced) are
    /// ignored. Returns `true` if the reversion fired.
    pub fn fire_reversion(&mut self, ticket: ReversionTicket) -> bool {
        match self.timer.take(ticket) {
            Some(due) => {
                self.record(Action::FireReversion(ticket));
                self.revert(due);
                true
            }
            None => {
                tracing::trace!(%ticket, "Ignored stale reversion ticket");
                false
            }
        }
    }

    // === Internals ===

    fn initialize(&mut self) {
        let epoch = self.session.epoch + 1;
        self.history.clear();
        self.events.clear();
        if let Some(cancelled) = self.timer.reset(epoch) {
            tracing::debug!(ticket = %cancelled.ticket, "Cancelled pending reversion");
            self.events.push(GameEvent::ReversionCancelled {
                ticket: cancelled.ticket,
            });
        }

        let mut deal_rng = self.rng.fork();
        self.session = Session::initialize(&mut deal_rng, epoch);
        tracing::debug!(epoch, "Dealt new session");
        self.events.push(GameEvent::SessionStarted { epoch });
    }

    fn evaluate_match(&mut self, first_pos: usize, second_pos: usize) -> SelectOutcome {
        let (first_card, second_card) = (&self.session.cards[first_pos], &self.session.cards[second_pos]);
        let (first, second) = (first_card.id, second_card.id);
        let symbol = first_card.symbol;
        let outcome = rules::compare(first_card, second_card);

        self.session.is_resolving = true;
        self.session.attempts += 1;

        match outcome {
            PairOutcome::Match => {
                for pos in [first_pos, second_pos] {
                    self.session.cards[pos].mark_matched();
                }
                self.session.selection.clear();
                self.session.is_resolving = false;

                tracing::debug!(%first, %second, ?symbol, attempts = self.session.attempts, "Pair matched");
                self.events.push(GameEvent::PairMatched { first, second, symbol });
                self.finish_resolution();
                SelectOutcome::Matched
            }
            PairOutcome::Mismatch => {
                if let Some(stale) = self.timer.cancel() {
                    self.events.push(GameEvent::ReversionCancelled { ticket: stale.ticket });
                }
                let ticket = self.timer.schedule([first, second], self.config.reveal_delay());

                tracing::debug!(%first, %second, %ticket, attempts = self.session.attempts, "Pair mismatched");
                self.events.push(GameEvent::PairMismatched { first, second, ticket });
                SelectOutcome::Mismatched(ticket)
            }
        }
    }

    fn revert(&mut self, due: PendingReversion) {
        let [first, second] = due.cards;
        for id in due.cards {
            if let Some(card) = self.session.card_mut(id) {
                card.flip_down();
            }
        }
        self.session.selection.clear();
        self.session.is_resolving = false;

        tracing::debug!(%first, %second, "Reverted pair");
        self.events.push(GameEvent::PairReverted { first, second });
        self.finish_resolution();
    }

    fn finish_resolution(&mut self) {
        let status = rules::end_condition(&self.session);
        if status == self.session.status {
            return;
        }
        self.session.status = status;

        let attempts = self.session.attempts;
        match status {
            GameStatus::Won => {
                tracing::info!(attempts, epoch = self.session.epoch, "Game won");
                self.events.push(GameEvent::GameWon { attempts });
            }
            GameStatus::Lost => {
                tracing::info!(attempts, epoch = self.session.epoch, "Game lost");
                self.events.push(GameEvent::GameLost { attempts });
            }
            GameStatus::Playing => {}
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, action));
    }

    // Back-to-back ticks fold into one: they all fall inside the same
    // pending window, so the sum fires exactly when the last one did.
    fn record_tick(&mut self, elapsed: Duration) {
        if let Some(ActionRecord {
            action: Action::Tick(total),
            ..
        }) = self.history.back_mut()
        {
            *total += elapsed;
            return;
        }
        self.record(Action::Tick(elapsed));
    }
}
