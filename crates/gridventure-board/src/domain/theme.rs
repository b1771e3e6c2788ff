//! Board themes: tables plus the texts shown when they fire.

use gridventure_core::error::DomainError;
use gridventure_notification::MessagePools;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;

/// A complete, authorable board: dimensions, transition tables and the
/// message pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTheme {
    /// Dimensions and transition tables.
    #[serde(default)]
    pub board: BoardConfig,
    /// Texts for boosts, setbacks and the win.
    #[serde(default)]
    pub messages: MessagePools,
}

impl BoardTheme {
    /// Validates both the board and the message pools.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoard` on the first violation.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.board.validate()?;
        self.messages.validate()
    }
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            board: BoardConfig::standard(),
            messages: MessagePools::standard(),
        }
    }
}
