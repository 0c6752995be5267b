//! # hanabi-engine
//!
//! Rules engine for the cooperative card game Hanabi.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: every action takes the current `RoomState` and
//!    returns the next one plus a log line, or a `Rejection`. The engine
//!    holds no ambient state and performs no I/O.
//!
//! 2. **Tagged Lifecycle**: a room is either `Waiting` or `InProgress`;
//!    every action is matched exhaustively against both.
//!
//! 3. **Misplays Are Moves**: an illegal play is accepted and penalized,
//!    never rejected.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles and hands use `im-rs`, so the
//!   next state is built from an O(1) clone of the current one.
//!
//! - **Injected Collaborators**: storage and broadcast live behind
//!   `RoomObserver`; identity is an opaque `ParticipantId`.
//!
//! ## Modules
//!
//! - `core`: participants and seats, RNG, configuration, actions, state
//! - `tiles`: colors, ranks, tiles, hints, deck composition
//! - `hand`: hands of tiles and hint markers
//! - `rules`: play-pile summary, legality, the turn/action engine
//! - `room`: room driver, action log, observers
//! - `view`: per-viewer presentation data
//! - `snapshot`: binary encoding of the room document

pub mod core;
pub mod tiles;
pub mod hand;
pub mod rules;
pub mod room;
pub mod view;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Action, Game, GameRng, LogEntry, ParticipantId, PlayerId, PlayerMap, RoomState, RulesConfig,
    WaitingRoom,
};

pub use crate::tiles::{generate_deck, hand_size, Color, Hint, Rank, Tile, DECK_SIZE};

pub use crate::hand::{draw_tiles, matches_hint, Hand, HandItem};

pub use crate::rules::{is_legal_play, HanabiRules, PileSummary, Rejection, Transition};

pub use crate::room::{help_text, ActionLog, NoopObserver, RecordingObserver, Room, RoomEvent, RoomObserver};

pub use crate::view::{GameView, ItemView, PlayerView};
