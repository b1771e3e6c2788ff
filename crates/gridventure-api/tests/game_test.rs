//! Integration tests for the hosted game.

mod common;

use axum::http::StatusCode;
use gridventure_test_support::SequenceRng;

#[tokio::test]
async fn test_fresh_game_is_not_started() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(&app.router, "/api/v1/game").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["started"], false);
    assert_eq!(json["phase"], "not_started");
    assert_eq!(json["position"], 1);
    assert_eq!(json["die_value"], 1);
    assert!(json["active_message"].is_null());
    assert!(json["active_transition"].is_null());
}

#[tokio::test]
async fn test_roll_before_start_returns_409() {
    let app = common::build_test_app();

    let (status, json) = common::post(&app.router, "/api/v1/game/roll").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "not_started");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_start_twice_returns_409() {
    let app = common::build_test_app();

    let (status, json) = common::post(&app.router, "/api/v1/game/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["phase"], "idle");
    assert_eq!(json["event_ids"].as_array().unwrap().len(), 2);
    assert!(json.get("die").is_none());

    let (status, json) = common::post(&app.router, "/api/v1/game/start").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "already_started");
}

#[tokio::test]
async fn test_boost_turn_lifecycle() {
    let app = common::build_test_app_with(common::standard_theme(), SequenceRng::new(vec![3, 0]));
    common::post(&app.router, "/api/v1/game/start").await;

    // Step 1: roll, the position waits for the animation
    let (status, json) = common::post(&app.router, "/api/v1/game/roll").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["die"], 3);
    assert_eq!(json["state"]["phase"], "rolling");
    assert_eq!(json["state"]["position"], 1);

    // Step 2: a second roll mid-turn is refused
    let (status, json) = common::post(&app.router, "/api/v1/game/roll").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "turn_in_progress");

    // Step 3: land on 4 and climb to 14
    app.advance_ms(1_700);
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["phase"], "transitioning");
    assert_eq!(json["position"], 14);
    assert_eq!(json["coordinate"], serde_json::json!({ "row": 1, "col": 6 }));
    assert_eq!(json["active_transition"]["origin"], 4);
    assert_eq!(json["active_transition"]["destination"], 14);
    assert_eq!(json["active_transition"]["is_boost"], true);
    assert!(json["active_transition"]["overlay"].is_object());
    assert_eq!(json["active_message"]["category"], "boost");

    // Step 4: the highlight ends and the turn settles
    app.advance_ms(2_000);
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["phase"], "idle");
    assert_eq!(json["die_value"], 3);
    assert_eq!(json["turn"], 1);
    assert!(json["active_transition"].is_null());
    assert_eq!(json["active_message"]["category"], "boost");

    // Step 5: the message times out on its own
    app.advance_ms(2_000);
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert!(json["active_message"].is_null());
}

#[tokio::test]
async fn test_reset_mid_transition_cancels_pending_work() {
    let app = common::build_test_app_with(common::standard_theme(), SequenceRng::new(vec![3, 0]));
    common::post(&app.router, "/api/v1/game/start").await;
    common::post(&app.router, "/api/v1/game/roll").await;
    app.advance_ms(1_700);

    let (status, json) = common::post(&app.router, "/api/v1/game/reset").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["phase"], "not_started");
    assert_eq!(json["state"]["position"], 1);
    assert!(json["state"]["active_message"].is_null());
    assert!(json["state"]["active_transition"].is_null());

    app.clock.advance_ms(10_000);
    let events = gridventure_api::driver::tick(&app.state).unwrap();
    assert!(events.is_empty());
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["phase"], "not_started");
}

#[tokio::test]
async fn test_reaching_goal_wins_and_blocks_further_rolls() {
    let app = common::build_test_app_with(common::short_theme(), SequenceRng::new(vec![6, 3]));
    common::post(&app.router, "/api/v1/game/start").await;

    common::post(&app.router, "/api/v1/game/roll").await;
    app.finish_turn();
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["position"], 7);

    common::post(&app.router, "/api/v1/game/roll").await;
    app.finish_turn();
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["position"], 10);
    assert_eq!(json["phase"], "won");
    assert_eq!(json["is_won"], true);
    assert_eq!(json["active_message"]["category"], "win");

    let (status, json) = common::post(&app.router, "/api/v1/game/roll").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "game_won");

    let (status, json) = common::post(&app.router, "/api/v1/game/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["is_won"], false);

    let (status, _) = common::post(&app.router, "/api/v1/game/start").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_sound_toggle_does_not_touch_game_state() {
    let app = common::build_test_app();
    assert!(app.state.sound_enabled());

    let (status, json) = common::put_json(
        &app.router,
        "/api/v1/game/sound",
        &serde_json::json!({ "enabled": false }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sound_enabled"], false);
    assert!(!app.state.sound_enabled());
    let (_, json) = common::get_json(&app.router, "/api/v1/game").await;
    assert_eq!(json["phase"], "not_started");
}
