//! Query handlers for the turn engine.
//!
//! Read-only projections of the engine for a presentation layer. Nothing
//! here mutates the engine.

use gridventure_board::domain::geometry::OverlayGeometry;
use gridventure_board::domain::layout::GridCoord;
use gridventure_core::error::DomainError;
use gridventure_notification::Message;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::TurnEngine;
use crate::domain::events::TransitionEvent;
use crate::domain::phase::TurnPhase;

/// The highlighted transition with the line to draw for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionView {
    /// The transition itself.
    #[serde(flatten)]
    pub transition: TransitionEvent,
    /// Where to draw the connecting line.
    pub overlay: OverlayGeometry,
}

/// Everything a presentation layer needs to render the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// The session identifier.
    pub session_id: Uuid,
    /// Whether a game has been started since the last reset.
    pub started: bool,
    /// Current cell.
    pub position: u32,
    /// Grid coordinate of the current cell.
    pub coordinate: GridCoord,
    /// Current phase.
    pub phase: TurnPhase,
    /// Die face to show.
    pub die_value: u32,
    /// Visible message, if any.
    pub active_message: Option<Message>,
    /// Highlighted transition, if any.
    pub active_transition: Option<TransitionView>,
    /// Whether the goal has been reached.
    pub is_won: bool,
    /// Rolls taken since the last reset.
    pub turn: u64,
}

/// Projects the engine's current state.
///
/// # Errors
///
/// Returns `DomainError::CellOutOfRange` if the engine's position or the
/// highlighted transition is off the board, which a validated board
/// never produces.
pub fn snapshot(engine: &TurnEngine) -> Result<GameSnapshot, DomainError> {
    let board = engine.board();
    let active_transition = engine
        .active_transition()
        .map(|&transition| {
            board
                .overlay_geometry(transition.origin, transition.destination)
                .map(|overlay| TransitionView {
                    transition,
                    overlay,
                })
        })
        .transpose()?;

    Ok(GameSnapshot {
        session_id: engine.id(),
        started: engine.is_started(),
        position: engine.position(),
        coordinate: board.layout(engine.position())?,
        phase: engine.phase(),
        die_value: engine.die_value(),
        active_message: engine.active_message().cloned(),
        active_transition,
        is_won: engine.is_won(),
        turn: engine.turn(),
    })
}
