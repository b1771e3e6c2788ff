//! Gridventure API server entry point.

use std::sync::{Arc, Mutex};

use gridventure_api::config::ServerConfig;
use gridventure_api::error::AppError;
use gridventure_api::state::AppState;
use gridventure_api::{driver, router};
use gridventure_board::application::theme_loader::{self, LoadedTheme};
use gridventure_board::domain::theme::BoardTheme;
use gridventure_core::clock::{Clock, SystemClock};
use gridventure_core::rng::{DeterministicRng, StdDeterministicRng};
use gridventure_timing::TurnTimings;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn load_theme(config: &ServerConfig) -> Result<LoadedTheme, AppError> {
    let loaded = match &config.board_path {
        Some(path) => theme_loader::load_theme_from_path(path)?,
        None => theme_loader::build_theme(BoardTheme::default())?,
    };
    Ok(loaded)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Gridventure API server");

    let config = ServerConfig::from_env()?;
    let theme = load_theme(&config)?;

    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded dice");
            Arc::new(Mutex::new(StdDeterministicRng::from_seed(seed)))
        }
        None => Arc::new(Mutex::new(StdDeterministicRng::from_entropy())),
    };
    let app_state = AppState::new(theme, TurnTimings::default(), clock, rng)?;

    tokio::spawn(driver::run(app_state.clone(), config.tick_interval));

    // TODO: Replace CorsLayer::permissive() with restricted origins once a
    // browser client has a fixed origin.
    let app = router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
