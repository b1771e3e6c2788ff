//! Command handlers for the turn engine.
//!
//! Each handler runs one intent against the engine and hands back the
//! events it produced. Handlers are synchronous: the engine never waits,
//! so callers lock it, call a handler, and release it.

use std::sync::{Mutex, MutexGuard};

use gridventure_core::clock::Clock;
use gridventure_core::command::Command;
use gridventure_core::error::DomainError;
use gridventure_core::rng::DeterministicRng;
use tracing::info;
use uuid::Uuid;

use crate::domain::aggregates::TurnEngine;
use crate::domain::commands::{ResetGame, RollDice, StartGame};
use crate::domain::errors::{GameCommandError, IntentRejected};
use crate::domain::events::GameEvent;

/// What an accepted intent produced.
#[derive(Debug)]
pub struct GameCommandResult {
    /// Session the events belong to.
    pub session_id: Uuid,
    /// The committed die value, for rolls.
    pub die: Option<u32>,
    /// Events produced by the intent, in order.
    pub events: Vec<GameEvent>,
}

fn lock_rng<'a>(
    rng: &'a Mutex<dyn DeterministicRng + Send + 'static>,
) -> Result<MutexGuard<'a, dyn DeterministicRng + Send + 'static>, DomainError> {
    rng.lock()
        .map_err(|_| DomainError::Infrastructure("RNG mutex poisoned".to_owned()))
}

/// Handles the `StartGame` command.
///
/// # Errors
///
/// Returns `IntentRejected` if a game is already running or won.
pub fn handle_start_game(
    command: &StartGame,
    engine: &mut TurnEngine,
    clock: &dyn Clock,
) -> Result<GameCommandResult, IntentRejected> {
    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "handling command"
    );
    engine.start(clock)?;
    Ok(GameCommandResult {
        session_id: engine.id(),
        die: None,
        events: engine.drain_events(),
    })
}

/// Handles the `RollDice` command. The game RNG is locked only for the
/// synchronous draw.
///
/// # Errors
///
/// Returns `GameCommandError::Rejected` unless the engine is idle, or
/// `GameCommandError::Domain` if the RNG mutex is poisoned.
pub fn handle_roll_dice(
    command: &RollDice,
    engine: &mut TurnEngine,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<GameCommandResult, GameCommandError> {
    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "handling command"
    );
    let die = {
        let mut rng_guard = lock_rng(rng)?;
        engine.roll_and_move(clock, &mut *rng_guard)?
    };
    Ok(GameCommandResult {
        session_id: engine.id(),
        die: Some(die),
        events: engine.drain_events(),
    })
}

/// Handles the `ResetGame` command. Reset is always accepted.
pub fn handle_reset_game(
    command: &ResetGame,
    engine: &mut TurnEngine,
    clock: &dyn Clock,
) -> GameCommandResult {
    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "handling command"
    );
    engine.reset(clock);
    GameCommandResult {
        session_id: engine.id(),
        die: None,
        events: engine.drain_events(),
    }
}

/// Fires every delay that is due and returns the events it produced.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
pub fn handle_advance_timers(
    engine: &mut TurnEngine,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Vec<GameEvent>, DomainError> {
    let mut rng_guard = lock_rng(rng)?;
    engine.advance(clock, &mut *rng_guard);
    Ok(engine.drain_events())
}
