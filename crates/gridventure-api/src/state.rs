//! Shared application state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use gridventure_board::application::theme_loader::LoadedTheme;
use gridventure_board::domain::board::Board;
use gridventure_core::clock::Clock;
use gridventure_core::error::DomainError;
use gridventure_core::rng::DeterministicRng;
use gridventure_engine::domain::aggregates::TurnEngine;
use gridventure_timing::TurnTimings;

use crate::cues::TracingCueSink;

/// Application state shared across all request handlers and the timer
/// driver. The engine sits behind one mutex so user input is serialised.
#[derive(Clone)]
pub struct AppState {
    /// The single game this server hosts.
    pub engine: Arc<Mutex<TurnEngine>>,
    /// The board the engine plays on.
    pub board: Arc<Board>,
    /// Time source for intents and the timer driver.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Game RNG: dice and message picks.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// UI-only sound flag read by the cue sink.
    pub sound_enabled: Arc<AtomicBool>,
}

impl AppState {
    /// Builds the engine for `theme` and wires its cue sink to the sound
    /// flag. Sound starts enabled.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the timings or message pools are invalid.
    pub fn new(
        theme: LoadedTheme,
        timings: TurnTimings,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Result<Self, DomainError> {
        let sound_enabled = Arc::new(AtomicBool::new(true));
        let board = Arc::new(theme.board);
        let engine = TurnEngine::new(Arc::clone(&board), theme.theme.messages, timings)?
            .with_cue_sink(Arc::new(TracingCueSink::new(Arc::clone(&sound_enabled))));

        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            board,
            clock,
            rng,
            sound_enabled,
        })
    }

    /// Locks the engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn lock_engine(&self) -> Result<MutexGuard<'_, TurnEngine>, DomainError> {
        self.engine
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("engine mutex poisoned: {e}")))
    }

    /// Flips the sound flag. Game state is unaffected.
    pub fn set_sound_enabled(&self, enabled: bool) {
        self.sound_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Current sound flag.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled.load(Ordering::Relaxed)
    }
}
