//! Message values shown to the player.

use serde::{Deserialize, Serialize};

/// Which pool a message was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// Educational message shown after a boost.
    Boost,
    /// Cautionary message shown after a setback.
    Setback,
    /// Congratulation shown on reaching the final cell.
    Win,
}

impl MessageCategory {
    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boost => "boost",
            Self::Setback => "setback",
            Self::Win => "win",
        }
    }
}

/// A message with its category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Text to display.
    pub text: String,
    /// The pool the text came from.
    pub category: MessageCategory,
}
