//! Domain events for the turn engine.

use gridventure_core::event::{DomainEvent, EventMetadata};
use gridventure_notification::{Message, MessageCategory};
use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;

/// A boost or setback that fired on the landing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// The cell the player landed on.
    pub origin: u32,
    /// The cell the player was moved to.
    pub destination: u32,
    /// `true` for a boost, `false` for a setback.
    pub is_boost: bool,
}

/// Emitted when a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStarted {
    /// Starting cell.
    pub position: u32,
}

/// Emitted when the roll animation commits the real die value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRolled {
    /// The committed value in `[1, 6]`.
    pub value: u32,
}

/// Emitted on every phase change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChanged {
    /// Phase before.
    pub from: TurnPhase,
    /// Phase after.
    pub to: TurnPhase,
}

/// Emitted whenever the position changes, by die or by transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMoved {
    /// Cell before the move.
    pub from: u32,
    /// Cell after the move.
    pub to: u32,
}

/// Emitted when a visible message times out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDismissed {
    /// Category of the message that was hidden.
    pub category: MessageCategory,
}

/// Emitted when the player reaches the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWon {
    /// The goal cell.
    pub position: u32,
    /// Rolls it took.
    pub turns: u64,
}

/// Emitted on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReset {
    /// Timers that were still pending and got cancelled.
    pub cancelled_timers: usize,
}

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "game.started";

/// Event type identifier for [`DiceRolled`].
pub const DICE_ROLLED_EVENT_TYPE: &str = "game.dice_rolled";

/// Event type identifier for [`PhaseChanged`].
pub const PHASE_CHANGED_EVENT_TYPE: &str = "game.phase_changed";

/// Event type identifier for [`PlayerMoved`].
pub const PLAYER_MOVED_EVENT_TYPE: &str = "game.player_moved";

/// Event type identifier for [`TransitionEvent`].
pub const TRANSITION_TRIGGERED_EVENT_TYPE: &str = "game.transition_triggered";

/// Event type identifier for an announced [`Message`].
pub const MESSAGE_ANNOUNCED_EVENT_TYPE: &str = "game.message_announced";

/// Event type identifier for [`MessageDismissed`].
pub const MESSAGE_DISMISSED_EVENT_TYPE: &str = "game.message_dismissed";

/// Event type identifier for [`GameWon`].
pub const GAME_WON_EVENT_TYPE: &str = "game.won";

/// Event type identifier for [`GameReset`].
pub const GAME_RESET_EVENT_TYPE: &str = "game.reset";

/// Event payload variants for the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventKind {
    /// A game started.
    GameStarted(GameStarted),
    /// The die committed its value.
    DiceRolled(DiceRolled),
    /// The phase changed.
    PhaseChanged(PhaseChanged),
    /// The position changed.
    PlayerMoved(PlayerMoved),
    /// A boost or setback fired.
    TransitionTriggered(TransitionEvent),
    /// A message became visible.
    MessageAnnounced(Message),
    /// The visible message timed out.
    MessageDismissed(MessageDismissed),
    /// The goal was reached.
    GameWon(GameWon),
    /// The game was reset.
    GameReset(GameReset),
}

impl GameEventKind {
    /// The event type identifier of this payload.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            Self::DiceRolled(_) => DICE_ROLLED_EVENT_TYPE,
            Self::PhaseChanged(_) => PHASE_CHANGED_EVENT_TYPE,
            Self::PlayerMoved(_) => PLAYER_MOVED_EVENT_TYPE,
            Self::TransitionTriggered(_) => TRANSITION_TRIGGERED_EVENT_TYPE,
            Self::MessageAnnounced(_) => MESSAGE_ANNOUNCED_EVENT_TYPE,
            Self::MessageDismissed(_) => MESSAGE_DISMISSED_EVENT_TYPE,
            Self::GameWon(_) => GAME_WON_EVENT_TYPE,
            Self::GameReset(_) => GAME_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the turn engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: GameEventKind,
}

impl DomainEvent for GameEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or(serde_json::Value::Null)
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
