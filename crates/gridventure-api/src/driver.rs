//! Background timer driver.
//!
//! The engine never sleeps; this task wakes when the next delay falls
//! due, or at least every `period`, and logs whatever the engine produced.

use std::time::Duration;

use gridventure_core::error::DomainError;
use gridventure_core::event::DomainEvent;
use gridventure_engine::application::command_handlers;
use gridventure_engine::domain::events::GameEvent;
use tracing::{error, info};

use crate::state::AppState;

/// Fires every delay due at the state's clock and returns the events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a mutex is poisoned.
pub fn tick(state: &AppState) -> Result<Vec<GameEvent>, DomainError> {
    let mut engine = state.lock_engine()?;
    command_handlers::handle_advance_timers(&mut engine, state.clock.as_ref(), &state.rng)
}

/// Logs drained engine events with their type and payload.
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        info!(
            event_type = event.event_type(),
            sequence_number = event.metadata().sequence_number,
            turn = event.metadata().turn,
            payload = %event.to_payload(),
            "game event"
        );
    }
}

/// How long the driver may sleep: until the engine's next pending delay,
/// capped at `period`. A delay already due yields zero.
#[must_use]
pub fn next_wake(state: &AppState, period: Duration) -> Duration {
    let deadline = state
        .lock_engine()
        .ok()
        .and_then(|engine| engine.next_deadline());
    match deadline {
        Some(due) => (due - state.clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO)
            .min(period),
        None => period,
    }
}

/// Advances the engine as delays fall due until the runtime shuts down.
pub async fn run(state: AppState, period: Duration) {
    let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
    info!(period_ms, "timer driver started");
    loop {
        tokio::time::sleep(next_wake(&state, period)).await;
        match tick(&state) {
            Ok(events) => log_events(&events),
            Err(e) => error!(error = %e, "timer driver tick failed"),
        }
    }
}
