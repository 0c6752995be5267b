//! Rules configuration.
//!
//! The defaults reproduce the standard game: eight hint tokens, refilled by
//! discards up to the cap, and a rank-5 play refill that ignores the cap.

use serde::{Deserialize, Serialize};

/// Default number of hint tokens (also the cap).
pub const NUM_INITIAL_HINTS: u8 = 8;

/// Tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Hint tokens at game start, and the cap for discard refills.
    pub max_hints: u8,

    /// Clamp the rank-5 play refill to `max_hints` as well.
    pub cap_rank_five_refill: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hints: NUM_INITIAL_HINTS,
            cap_rank_five_refill: false,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hint cap and starting hint count.
    #[must_use]
    pub fn with_max_hints(mut self, max_hints: u8) -> Self {
        self.max_hints = max_hints;
        self
    }

    /// Cap the rank-5 refill at `max_hints`.
    #[must_use]
    pub fn capped_rank_five_refill(mut self) -> Self {
        self.cap_rank_five_refill = true;
        self
    }

    /// Hint count after a discard refill.
    #[must_use]
    pub fn refill_after_discard(&self, hints: u8) -> u8 {
        hints.saturating_add(1).min(self.max_hints)
    }

    /// Hint count after completing a color with a 5.
    #[must_use]
    pub fn refill_after_five(&self, hints: u8) -> u8 {
        let refilled = hints.saturating_add(1);
        if self.cap_rank_five_refill {
            refilled.min(self.max_hints)
        } else {
            refilled
        }
    }
}
