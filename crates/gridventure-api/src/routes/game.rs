//! Routes for the hosted game.

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use gridventure_engine::application::command_handlers::{self, GameCommandResult};
use gridventure_engine::application::query_handlers::{self, GameSnapshot};
use gridventure_engine::domain::aggregates::TurnEngine;
use gridventure_engine::domain::commands;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::driver;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body returned after an intent is accepted.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// IDs of the events the intent produced.
    pub event_ids: Vec<Uuid>,
    /// The committed die value, for rolls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub die: Option<u32>,
    /// The game right after the intent.
    pub state: GameSnapshot,
}

/// Request body for PUT /sound.
#[derive(Debug, Deserialize)]
pub struct SoundRequest {
    /// Whether cues should be audible.
    pub enabled: bool,
}

/// Response body for PUT /sound.
#[derive(Debug, Serialize)]
pub struct SoundResponse {
    /// The flag after the update.
    pub sound_enabled: bool,
}

fn respond(
    engine: &TurnEngine,
    result: &GameCommandResult,
) -> Result<Json<CommandResponse>, ApiError> {
    driver::log_events(&result.events);
    Ok(Json(CommandResponse {
        event_ids: result.events.iter().map(|e| e.metadata.event_id).collect(),
        die: result.die,
        state: query_handlers::snapshot(engine)?,
    }))
}

/// GET /
async fn get_game(State(state): State<AppState>) -> Result<Json<GameSnapshot>, ApiError> {
    let engine = state.lock_engine()?;
    Ok(Json(query_handlers::snapshot(&engine)?))
}

/// POST /start
#[instrument(skip(state))]
async fn start_game(State(state): State<AppState>) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::StartGame {
        correlation_id: Uuid::new_v4(),
    };
    let mut engine = state.lock_engine()?;
    let result =
        command_handlers::handle_start_game(&command, &mut engine, state.clock.as_ref())?;
    respond(&engine, &result)
}

/// POST /roll
#[instrument(skip(state))]
async fn roll_dice(State(state): State<AppState>) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RollDice {
        correlation_id: Uuid::new_v4(),
    };
    let mut engine = state.lock_engine()?;
    let result = command_handlers::handle_roll_dice(
        &command,
        &mut engine,
        state.clock.as_ref(),
        &state.rng,
    )?;
    respond(&engine, &result)
}

/// POST /reset
#[instrument(skip(state))]
async fn reset_game(State(state): State<AppState>) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::ResetGame {
        correlation_id: Uuid::new_v4(),
    };
    let mut engine = state.lock_engine()?;
    let result =
        command_handlers::handle_reset_game(&command, &mut engine, state.clock.as_ref());
    respond(&engine, &result)
}

/// PUT /sound
#[instrument(skip(state, request), fields(enabled = request.enabled))]
async fn set_sound(
    State(state): State<AppState>,
    Json(request): Json<SoundRequest>,
) -> Json<SoundResponse> {
    state.set_sound_enabled(request.enabled);
    info!(enabled = request.enabled, "sound toggled");
    Json(SoundResponse {
        sound_enabled: state.sound_enabled(),
    })
}

/// Returns the router for the game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_game))
        .route("/start", post(start_game))
        .route("/roll", post(roll_dice))
        .route("/reset", post(reset_game))
        .route("/sound", put(set_sound))
}
