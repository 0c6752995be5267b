//! Reasons an action is refused.
//!
//! A rejection leaves the room state untouched. The `Display` text is what
//! the acting participant is shown.

use thiserror::Error;

/// A precondition that an action failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not your turn")]
    NotYourTurn,

    #[error("this game hasn't started yet, try 'start'")]
    NotStarted,

    #[error("game has already started")]
    AlreadyStarted,

    #[error("wrong number of players, we can support 2--5, you have {0}")]
    UnsupportedPlayerCount(usize),

    #[error("can't {verb} that, try again")]
    NoTileAt { verb: &'static str, index: usize },

    #[error("no hints left")]
    NoHintsLeft,

    #[error("prefix '{0}' doesn't match any of the other players")]
    NoMatchingPlayer(String),

    #[error("prefix '{prefix}' is ambiguous, it matches {matches} players")]
    AmbiguousPlayer { prefix: String, matches: usize },

    #[error("invalid hint: {0}")]
    InvalidHint(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("room document is inconsistent: {0}")]
    CorruptGame(String),
}
