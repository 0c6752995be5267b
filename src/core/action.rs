//! Actions and log entries.
//!
//! An `Action` is an already-parsed command. Arguments that the engine must
//! validate (hint tokens, name prefixes, display names) stay as raw text so
//! that rejection reasons can quote them.

use serde::{Deserialize, Serialize};

/// A command issued by a participant.
///
/// ```
/// use hanabi_engine::core::Action;
///
/// let hint = Action::hint("al", "r");
/// assert!(hint.is_turn_gated());
/// assert!(!Action::rename("Alice").is_turn_gated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enter the waiting room.
    Join,
    /// Deal hands and begin the game.
    Start,
    /// Discard the tile at a hand position.
    Discard { index: usize },
    /// Play the tile at a hand position.
    Play { index: usize },
    /// Tell another player about a color or rank.
    Hint { target: String, hint: String },
    /// Set the actor's display name.
    Rename { name: String },
}

impl Action {
    pub fn hint(target: impl Into<String>, hint: impl Into<String>) -> Self {
        Action::Hint {
            target: target.into(),
            hint: hint.into(),
        }
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Action::Rename { name: name.into() }
    }

    /// Verb used in log lines and rejection reasons.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Join => "join",
            Action::Start => "start",
            Action::Discard { .. } => "discard",
            Action::Play { .. } => "play",
            Action::Hint { .. } => "hint",
            Action::Rename { .. } => "name",
        }
    }

    /// Does this action require it to be the actor's turn?
    #[must_use]
    pub fn is_turn_gated(&self) -> bool {
        matches!(
            self,
            Action::Discard { .. } | Action::Play { .. } | Action::Hint { .. }
        )
    }
}

/// One line of the room's action log.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
}

impl LogEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
