//! Notification sinks for presentation collaborators
//!
//! - MatchObserver:     trait the controller notifies after every change
//! - NoopObserver:      discards all notifications
//! - RecordingObserver: keeps every update, for tests and replays

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use crate::game::{MatchState, RoundOutcome};

/// Payload emitted after a round is applied
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdate {
    pub outcome: RoundOutcome,
    pub state: MatchState,
    pub match_over: bool,
}

impl StateUpdate {
    /// Flat view with ready-made text, as the browser page renders it
    pub fn view(&self) -> UpdateView<'_> {
        UpdateView {
            outcome: &self.outcome,
            state: &self.state,
            match_over: self.match_over,
            headline: self.outcome.headline(),
            verdict: self.state.verdict(),
        }
    }
}

/// Serialized form of a [`StateUpdate`] plus its display text
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateView<'a> {
    pub outcome: &'a RoundOutcome,
    pub state: &'a MatchState,
    pub match_over: bool,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<&'static str>,
}

/// Abstract sink for match changes.
pub trait MatchObserver {
    fn on_update(&mut self, update: &StateUpdate);

    fn on_reset(&mut self, _state: &MatchState) {}
}

/// Sink that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_update(&mut self, _update: &StateUpdate) {
        // intentionally no-op
    }
}

/// Sink that records every notification in a shared log.
///
/// Cloning shares the log, so a test can keep one handle and hand the
/// other to the controller.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    log: Rc<RefCell<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    updates: Vec<StateUpdate>,
    resets: usize,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<StateUpdate> {
        self.log.borrow().updates.clone()
    }

    pub fn last(&self) -> Option<StateUpdate> {
        self.log.borrow().updates.last().cloned()
    }

    pub fn reset_count(&self) -> usize {
        self.log.borrow().resets
    }
}

impl MatchObserver for RecordingObserver {
    fn on_update(&mut self, update: &StateUpdate) {
        self.log.borrow_mut().updates.push(update.clone());
    }

    fn on_reset(&mut self, _state: &MatchState) {
        self.log.borrow_mut().resets += 1;
    }
}
