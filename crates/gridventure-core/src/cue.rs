//! Audio cue seam.
//!
//! The engine never owns a sound subsystem. It fires discrete cues at
//! fixed points of a turn into whatever sink the caller injected.

use serde::{Deserialize, Serialize};

/// A discrete sound cue fired during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// The die started rolling.
    Dice,
    /// A boost transition resolved.
    Boost,
    /// A setback transition resolved.
    Setback,
    /// The player reached the final cell.
    Win,
}

/// Fire-and-forget receiver of [`Cue`]s.
pub trait CueSink: Send + Sync {
    /// Plays (or drops) a cue. Must not block.
    fn play(&self, cue: Cue);
}

/// A sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCueSink;

impl CueSink for SilentCueSink {
    fn play(&self, _cue: Cue) {}
}
