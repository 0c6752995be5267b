//! Persistence/notification collaborator and the action log.
//!
//! The room never performs I/O itself. After each applied action it hands
//! the new state and the new log line to a `RoomObserver`, which may store
//! them, broadcast them, or ignore them.

use im::Vector;
use std::sync::mpsc::Sender;

use crate::core::{LogEntry, RoomState};

/// Receives every applied transition, in order.
pub trait RoomObserver {
    /// The room document was replaced.
    fn state_replaced(&mut self, state: &RoomState);

    /// A line was appended to the action log.
    fn entry_logged(&mut self, entry: &LogEntry);
}

/// Observer that discards all notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoomObserver for NoopObserver {
    fn state_replaced(&mut self, _state: &RoomState) {}

    fn entry_logged(&mut self, _entry: &LogEntry) {}
}

/// Keeps a copy of everything it is told.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub states: Vec<RoomState>,
    pub entries: Vec<LogEntry>,
}

impl RoomObserver for RecordingObserver {
    fn state_replaced(&mut self, state: &RoomState) {
        self.states.push(state.clone());
    }

    fn entry_logged(&mut self, entry: &LogEntry) {
        self.entries.push(entry.clone());
    }
}

/// Notification sent over a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomEvent {
    StateReplaced(RoomState),
    EntryLogged(LogEntry),
}

/// Forwards notifications to a channel. A hung-up receiver is ignored.
impl RoomObserver for Sender<RoomEvent> {
    fn state_replaced(&mut self, state: &RoomState) {
        let _ = self.send(RoomEvent::StateReplaced(state.clone()));
    }

    fn entry_logged(&mut self, entry: &LogEntry) {
        let _ = self.send(RoomEvent::EntryLogged(entry.clone()));
    }
}

/// Append-only action log. As an observer it records every logged line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vector<LogEntry>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Entries in the order they were appended.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries newest first, the order they are displayed in.
    pub fn recent_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }
}

impl RoomObserver for ActionLog {
    fn state_replaced(&mut self, _state: &RoomState) {}

    fn entry_logged(&mut self, entry: &LogEntry) {
        self.push(entry.clone());
    }
}
