//! Commands (user intents) for the turn engine.

use gridventure_core::command::Command;
use uuid::Uuid;

/// Command to start a game.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "game.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to roll the die and play out a turn.
#[derive(Debug, Clone)]
pub struct RollDice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for RollDice {
    fn command_type(&self) -> &'static str {
        "game.roll"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to abandon the current game.
#[derive(Debug, Clone)]
pub struct ResetGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetGame {
    fn command_type(&self) -> &'static str {
        "game.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
