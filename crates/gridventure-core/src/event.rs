//! Observable engine events.
//!
//! Nothing is persisted. Events exist so a presentation layer can follow a
//! turn step by step after draining them from the engine's outbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope fields shared by every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique per event.
    pub event_id: Uuid,
    /// Dotted name such as `game.dice_rolled`.
    pub event_type: String,
    /// Game session that produced the event.
    pub session_id: Uuid,
    /// 1-based position in the session's outbox, never reused.
    pub sequence_number: i64,
    /// Roll counter when the event was produced; 0 before the first roll.
    pub turn: u64,
    /// The instant the step happened. For timer-driven steps this is the
    /// timer's due instant, not the moment it was noticed.
    pub occurred_at: DateTime<Utc>,
}

/// Implemented by every event envelope.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Dotted event name.
    fn event_type(&self) -> &'static str;

    /// The payload as JSON, for logs and clients.
    fn to_payload(&self) -> serde_json::Value;

    /// The envelope fields.
    fn metadata(&self) -> &EventMetadata;
}
