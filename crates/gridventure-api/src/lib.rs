//! Gridventure: HTTP presentation layer.
//!
//! Hosts one game behind a mutex, exposes its intents and projection over
//! axum, and drives its timers from a background task.

use axum::Router;

pub mod config;
pub mod cues;
pub mod driver;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full route tree without middleware.
pub fn router(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/game", routes::game::router())
        .nest("/api/v1/board", routes::board::router())
        .with_state(state)
}
