//! Error types for the turn engine.

use gridventure_core::error::DomainError;
use thiserror::Error;

use super::phase::TurnPhase;

/// Why a user intent was refused. A refusal never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentRejected {
    /// Rolled before starting.
    #[error("game has not been started")]
    NotStarted,

    /// Started twice.
    #[error("game is already in progress")]
    AlreadyStarted,

    /// Rolled while the previous turn is still playing out.
    #[error("a turn is already in progress (phase: {phase})")]
    TurnInProgress {
        /// Phase at the time of the intent.
        phase: TurnPhase,
    },

    /// Rolled or started after winning.
    #[error("game is already won")]
    GameWon,
}

/// Errors surfaced by the command handlers.
#[derive(Debug, Error)]
pub enum GameCommandError {
    /// The engine refused the intent.
    #[error(transparent)]
    Rejected(#[from] IntentRejected),

    /// An infrastructure failure around the engine (e.g. a poisoned lock).
    #[error(transparent)]
    Domain(#[from] DomainError),
}
