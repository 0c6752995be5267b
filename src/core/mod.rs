//! Core types: participants and seats, RNG, configuration, actions, state.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{ParticipantId, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{RulesConfig, NUM_INITIAL_HINTS};
pub use action::{Action, LogEntry};
pub use state::{Game, Names, RoomState, WaitingRoom};
