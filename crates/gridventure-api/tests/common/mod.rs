//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gridventure_board::application::theme_loader::{self, LoadedTheme};
use gridventure_board::domain::config::BoardConfig;
use gridventure_board::domain::theme::BoardTheme;
use gridventure_core::clock::Clock;
use gridventure_core::rng::DeterministicRng;
use gridventure_notification::MessagePools;
use gridventure_test_support::{ManualClock, SequenceRng};
use gridventure_timing::TurnTimings;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gridventure_api::router;
use gridventure_api::state::AppState;

/// A running test app: the router, its state, and the clock behind it.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Moves the clock forward and runs the timer driver once.
    pub fn advance_ms(&self, ms: i64) {
        self.clock.advance_ms(ms);
        gridventure_api::driver::tick(&self.state).unwrap();
    }

    /// Moves the clock past the longest possible turn and runs the driver.
    pub fn finish_turn(&self) {
        let longest = TurnTimings::default().longest_turn().num_milliseconds();
        self.advance_ms(longest);
    }
}

/// The standard board with the default theme.
pub fn standard_theme() -> LoadedTheme {
    theme_loader::build_theme(BoardTheme::default()).unwrap()
}

/// A ten-cell board with no transitions, for reaching the goal quickly.
pub fn short_theme() -> LoadedTheme {
    theme_loader::build_theme(BoardTheme {
        board: BoardConfig {
            cell_count: 10,
            columns: 5,
            boosts: BTreeMap::new(),
            setbacks: BTreeMap::new(),
        },
        messages: MessagePools::standard(),
    })
    .unwrap()
}

/// Build the full app router over `theme` with a manual clock and a
/// scripted game RNG. Uses the same route tree as `main.rs`.
pub fn build_test_app_with(theme: LoadedTheme, rng: SequenceRng) -> TestApp {
    let clock = Arc::new(ManualClock::at_epoch());
    let shared_clock: Arc<dyn Clock + Send + Sync> = clock.clone();
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let state = AppState::new(theme, TurnTimings::default(), shared_clock, rng).unwrap();

    TestApp {
        router: router(state.clone()),
        state,
        clock,
    }
}

/// Build the standard app with an RNG that must not be consulted.
pub fn build_test_app() -> TestApp {
    build_test_app_with(standard_theme(), SequenceRng::new(vec![]))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request without a body and return the response.
pub async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
