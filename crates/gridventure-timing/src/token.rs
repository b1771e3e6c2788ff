//! Turn tokens.

use serde::{Deserialize, Serialize};

/// Identifies the turn (and the reset epoch) a timer belongs to.
///
/// `epoch` advances on every reset and `turn` on every roll. A timer is
/// current for turn-scoped work only if both match, and for session-scoped
/// work (message dismissal) if the epoch matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TurnToken {
    /// Reset generation.
    pub epoch: u64,
    /// Roll counter within the epoch.
    pub turn: u64,
}

impl TurnToken {
    /// The token of a freshly created session.
    pub const INITIAL: Self = Self { epoch: 0, turn: 0 };

    /// The token for the next roll in the same epoch.
    #[must_use]
    pub const fn next_turn(self) -> Self {
        Self {
            epoch: self.epoch,
            turn: self.turn.wrapping_add(1),
        }
    }

    /// The token after a reset: new epoch, turn counter back to zero.
    #[must_use]
    pub const fn next_epoch(self) -> Self {
        Self {
            epoch: self.epoch.wrapping_add(1),
            turn: 0,
        }
    }

    /// Whether both tokens belong to the same reset epoch.
    #[must_use]
    pub const fn same_epoch(self, other: Self) -> bool {
        self.epoch == other.epoch
    }
}

impl Default for TurnToken {
    fn default() -> Self {
        Self::INITIAL
    }
}
