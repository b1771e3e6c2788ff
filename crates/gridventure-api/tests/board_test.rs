//! Integration tests for the board endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_board_lists_every_cell_in_snake_order() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(&app.router, "/api/v1/board").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cell_count"], 100);
    assert_eq!(json["columns"], 10);
    assert_eq!(json["rows"], 10);
    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 100);
    assert_eq!(cells[9]["coord"], serde_json::json!({ "row": 0, "col": 9 }));
    assert_eq!(cells[10]["coord"], serde_json::json!({ "row": 1, "col": 9 }));
    assert_eq!(cells[3]["transition"]["kind"], "boost");
    assert_eq!(cells[3]["transition"]["destination"], 14);
    assert!(cells[4]["transition"].is_null());
}

#[tokio::test]
async fn test_board_lists_transitions_with_overlay() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(&app.router, "/api/v1/board").await;

    assert_eq!(status, StatusCode::OK);
    let transitions = json["transitions"].as_array().unwrap();
    assert_eq!(transitions.len(), 19);
    assert_eq!(transitions[0]["origin"], 4);
    assert_eq!(transitions[0]["destination"], 14);
    assert_eq!(transitions[0]["kind"], "boost");

    let setback = transitions
        .iter()
        .find(|t| t["origin"] == 62)
        .unwrap();
    assert_eq!(setback["kind"], "setback");
    assert_eq!(setback["destination"], 19);
    // Setbacks run down the board, so the line ends lower on screen.
    let from_y = setback["overlay"]["from"]["y"].as_f64().unwrap();
    let to_y = setback["overlay"]["to"]["y"].as_f64().unwrap();
    assert!(to_y > from_y);
}
