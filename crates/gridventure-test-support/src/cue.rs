//! Test cue sink: records every cue it receives.

use std::sync::{Arc, Mutex};

use gridventure_core::cue::{Cue, CueSink};

/// A cue sink that records cues. Clones share the same record, so a test
/// can hand one clone to the engine and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingCueSink {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingCueSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all cues played so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl CueSink for RecordingCueSink {
    fn play(&self, cue: Cue) {
        self.played.lock().unwrap().push(cue);
    }
}
