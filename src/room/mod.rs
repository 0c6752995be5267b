//! Room lifecycle around the rules engine.
//!
//! `Room` keeps only the latest state, serializes actions one at a time, and
//! hands every change to an injected `RoomObserver`. The log lives with the
//! observer (`ActionLog` is one).

pub mod observer;
pub mod driver;

pub use driver::{help_text, Room};
pub use observer::{ActionLog, NoopObserver, RecordingObserver, RoomEvent, RoomObserver};
