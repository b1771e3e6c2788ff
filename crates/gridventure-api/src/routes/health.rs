//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` if the engine is unusable.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Phase of the hosted game, when the engine can be read.
    pub phase: Option<&'static str>,
}

/// GET /health
///
/// Reports `503` if the engine mutex has been poisoned by a panic.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let phase = state.lock_engine().ok().map(|engine| engine.phase().as_str());
    let (code, status) = if phase.is_some() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            phase,
        }),
    )
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
