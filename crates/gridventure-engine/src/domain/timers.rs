//! Payloads of the engine's scheduled delays.

/// What a scheduled delay does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnTimer {
    /// Show the next animation face; the last tick commits the roll.
    RollTick {
        /// 1-based tick number.
        tick: u32,
    },
    /// Look up the landing cell after the pre-transition pause.
    RevealTransition,
    /// Stop highlighting the transition.
    EndHighlight,
    /// Leave `Settled` for `Idle`.
    Settle,
    /// Hide the message announced as `generation`.
    DismissMessage {
        /// Announcement counter of the message to hide.
        generation: u64,
    },
}

impl TurnTimer {
    /// Turn-scoped timers die with the turn; message dismissal outlives it
    /// and only dies with a reset.
    pub(crate) const fn is_turn_scoped(self) -> bool {
        !matches!(self, Self::DismissMessage { .. })
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::RollTick { .. } => "roll_tick",
            Self::RevealTransition => "reveal_transition",
            Self::EndHighlight => "end_highlight",
            Self::Settle => "settle",
            Self::DismissMessage { .. } => "dismiss_message",
        }
    }
}
