//! Hanabi rules.
//!
//! - `pile`: play-pile summary and the single legality rule for plays
//! - `rejection`: reasons an action is refused
//! - `engine`: the turn/action state machine

pub mod pile;
pub mod rejection;
pub mod engine;

pub use engine::{HanabiRules, Transition};
pub use pile::{is_legal_play, PileSummary};
pub use rejection::Rejection;
