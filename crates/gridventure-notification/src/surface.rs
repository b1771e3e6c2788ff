//! The single visible message slot.

use chrono::{DateTime, TimeDelta, Utc};
use gridventure_core::rng::DeterministicRng;
use tracing::debug;

use crate::message::{Message, MessageCategory};
use crate::pools::MessagePools;

/// The message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMessage {
    /// The message itself.
    pub message: Message,
    /// When it was announced.
    pub shown_at: DateTime<Utc>,
    /// When it stops being visible.
    pub expires_at: DateTime<Utc>,
    /// Announcement counter; a dismissal carrying an older value is ignored.
    pub generation: u64,
}

/// Holds at most one visible message and picks new ones from the pools.
#[derive(Debug, Clone)]
pub struct NotificationSurface {
    pools: MessagePools,
    visible_for: TimeDelta,
    active: Option<ActiveMessage>,
    generation: u64,
}

impl NotificationSurface {
    /// Creates an empty surface.
    #[must_use]
    pub const fn new(pools: MessagePools, visible_for: TimeDelta) -> Self {
        Self {
            pools,
            visible_for,
            active: None,
            generation: 0,
        }
    }

    /// Picks a message for `category` and makes it the visible one,
    /// replacing whatever was shown before.
    pub fn announce(
        &mut self,
        category: MessageCategory,
        rng: &mut dyn DeterministicRng,
        now: DateTime<Utc>,
    ) -> &ActiveMessage {
        let message = self.pools.pick(category, rng);
        self.generation = self.generation.wrapping_add(1);
        if let Some(previous) = &self.active {
            debug!(
                previous = previous.message.category.as_str(),
                next = category.as_str(),
                "preempting visible message"
            );
        }
        let expires_at = now
            .checked_add_signed(self.visible_for)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.active.insert(ActiveMessage {
            message,
            shown_at: now,
            expires_at,
            generation: self.generation,
        })
    }

    /// Clears the visible message if it is still the one announced as
    /// `generation`. Returns whether anything was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.active {
            Some(active) if active.generation == generation => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Clears the visible message unconditionally.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The visible message, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveMessage> {
        self.active.as_ref()
    }
}
