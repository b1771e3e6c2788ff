//! Turn phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the engine is within the game and the current turn.
///
/// `NotStarted → Idle ⇄ (Rolling → Moving → [Transitioning] → Settled) → Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// No game in progress.
    NotStarted,
    /// Waiting for a roll.
    Idle,
    /// The die is animating.
    Rolling,
    /// The token landed; waiting to reveal a transition.
    Moving,
    /// A boost or setback is highlighted.
    Transitioning,
    /// The turn's final position is fixed.
    Settled,
    /// The goal was reached. Only a reset leaves this phase.
    Won,
}

impl TurnPhase {
    /// Stable `snake_case` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Idle => "idle",
            Self::Rolling => "rolling",
            Self::Moving => "moving",
            Self::Transitioning => "transitioning",
            Self::Settled => "settled",
            Self::Won => "won",
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
