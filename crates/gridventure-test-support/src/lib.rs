//! Shared test mocks and utilities for the Gridventure engine.

mod clock;
mod cue;
mod rng;

pub use clock::{FixedClock, ManualClock};
pub use cue::RecordingCueSink;
pub use rng::{MockRng, SequenceRng};
