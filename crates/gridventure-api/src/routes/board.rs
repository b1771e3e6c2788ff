//! Routes for the static board.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use gridventure_board::application::query_handlers::{self, BoardView};
use gridventure_board::domain::board::TransitionKind;
use gridventure_board::domain::geometry::OverlayGeometry;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// One transition with the line to draw for it.
#[derive(Debug, Serialize)]
pub struct TransitionLineView {
    /// Source cell.
    pub origin: u32,
    /// Destination cell.
    pub destination: u32,
    /// Boost or setback.
    pub kind: TransitionKind,
    /// Where to draw the line.
    pub overlay: OverlayGeometry,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Every cell with its coordinate and transition.
    #[serde(flatten)]
    pub layout: BoardView,
    /// Every transition in source order.
    pub transitions: Vec<TransitionLineView>,
}

/// GET /
async fn get_board(State(state): State<AppState>) -> Result<Json<BoardResponse>, ApiError> {
    let board = state.board.as_ref();
    let transitions = board
        .transitions()
        .map(|(origin, transition)| {
            board
                .overlay_geometry(origin, transition.destination)
                .map(|overlay| TransitionLineView {
                    origin,
                    destination: transition.destination,
                    kind: transition.kind,
                    overlay,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(BoardResponse {
        layout: query_handlers::board_view(board),
        transitions,
    }))
}

/// Returns the router for the board.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_board))
}
