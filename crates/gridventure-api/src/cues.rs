//! Audio cues for the HTTP front end.
//!
//! A server has no speakers. Cues are logged while the sound flag is on so
//! a client following the logs can play them, and dropped otherwise.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridventure_core::cue::{Cue, CueSink};
use tracing::{debug, info};

/// Logs cues while `enabled` is set.
#[derive(Debug, Clone)]
pub struct TracingCueSink {
    enabled: Arc<AtomicBool>,
}

impl TracingCueSink {
    /// Creates a sink gated by the shared sound flag.
    #[must_use]
    pub const fn new(enabled: Arc<AtomicBool>) -> Self {
        Self { enabled }
    }

    /// Whether cues are currently audible.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl CueSink for TracingCueSink {
    fn play(&self, cue: Cue) {
        if self.is_enabled() {
            info!(cue = ?cue, "audio cue");
        } else {
            debug!(cue = ?cue, "audio cue muted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_follows_shared_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let sink = TracingCueSink::new(Arc::clone(&flag));
        assert!(sink.is_enabled());

        flag.store(false, Ordering::Relaxed);
        sink.play(Cue::Dice);

        assert!(!sink.is_enabled());
    }
}
