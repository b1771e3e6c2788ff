//! Time source.
//!
//! The engine never reads wall-clock time itself. Intents and timer
//! advances are handed a `Clock`, so a test can freeze or step time and a
//! whole turn plays out without sleeping.

use chrono::{DateTime, Utc};

/// Source of "now" for intents and due-timer checks.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the server binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
