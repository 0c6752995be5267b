//! Room driver: holds the current document and routes actions through the
//! rules.

use tracing::debug;

use super::observer::{NoopObserver, RoomObserver};
use crate::core::{Action, GameRng, LogEntry, ParticipantId, RoomState};
use crate::rules::{HanabiRules, Rejection, Transition};
use crate::view::GameView;

/// Help text for the current lifecycle state.
#[must_use]
pub fn help_text(state: &RoomState) -> &'static str {
    match state {
        RoomState::Waiting(_) => "this game hasn't started yet, try 'start'",
        RoomState::InProgress(_) => {
            "you can 'discard <tile_idx>', 'play <tile_idx>', or 'hint <player> <hint>'"
        }
    }
}

/// A single room: current state, RNG and observer.
///
/// Only the latest state is held. Log lines go to the observer; use
/// `ActionLog` as the observer to keep them in memory.
pub struct Room<O = NoopObserver> {
    rules: HanabiRules,
    state: RoomState,
    rng: GameRng,
    observer: O,
}

impl Room<NoopObserver> {
    /// Empty waiting room with default rules and an unseeded RNG.
    #[must_use]
    pub fn open() -> Self {
        Self::new(HanabiRules::default(), GameRng::from_entropy(), NoopObserver)
    }
}

impl<O: RoomObserver> Room<O> {
    /// Empty waiting room.
    pub fn new(rules: HanabiRules, rng: GameRng, observer: O) -> Self {
        Self::with_state(rules, RoomState::default(), rng, observer)
    }

    /// Resume from a stored document.
    pub fn with_state(rules: HanabiRules, state: RoomState, rng: GameRng, observer: O) -> Self {
        Self {
            rules,
            state,
            rng,
            observer,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RoomState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &HanabiRules {
        &self.rules
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[must_use]
    pub fn help_text(&self) -> &'static str {
        help_text(&self.state)
    }

    /// Presentation data for a viewer, once the game has started.
    #[must_use]
    pub fn view_for(&self, viewer: &ParticipantId) -> Option<GameView> {
        self.state.game().map(|game| GameView::for_viewer(game, viewer))
    }

    /// Apply an action. On success the state is replaced and the observer is
    /// handed the new state and log line; on rejection nothing changes.
    pub fn perform(
        &mut self,
        actor: &ParticipantId,
        action: &Action,
    ) -> Result<LogEntry, Rejection> {
        let Transition { state, log } =
            self.rules.apply(&self.state, actor, action, &mut self.rng)?;

        self.state = state;
        self.observer.state_replaced(&self.state);
        self.observer.entry_logged(&log);
        debug!(started = self.state.is_started(), "Room updated");

        Ok(log)
    }

    /// Take the observer back, e.g. to inspect a recording.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
