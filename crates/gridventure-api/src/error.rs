//! Gridventure: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gridventure_core::error::DomainError;
use gridventure_engine::domain::errors::{GameCommandError, IntentRejected};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The board theme or timings failed to load or validate.
    #[error("board error: {0}")]
    Board(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around engine errors that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Something outside the game rules went wrong.
    Domain(DomainError),
    /// The engine refused the intent in its current phase.
    Rejected(IntentRejected),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<IntentRejected> for ApiError {
    fn from(err: IntentRejected) -> Self {
        Self::Rejected(err)
    }
}

impl From<GameCommandError> for ApiError {
    fn from(err: GameCommandError) -> Self {
        match err {
            GameCommandError::Rejected(rejected) => Self::Rejected(rejected),
            GameCommandError::Domain(domain) => Self::Domain(domain),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            Self::Rejected(rejected) => {
                let code = match rejected {
                    IntentRejected::NotStarted => "not_started",
                    IntentRejected::AlreadyStarted => "already_started",
                    IntentRejected::TurnInProgress { .. } => "turn_in_progress",
                    IntentRejected::GameWon => "game_won",
                };
                (StatusCode::CONFLICT, code, rejected.to_string())
            }
            Self::Domain(domain) => {
                let (status, code) = match domain {
                    DomainError::CellOutOfRange { .. } => {
                        (StatusCode::BAD_REQUEST, "cell_out_of_range")
                    }
                    DomainError::InvalidBoard(_) => (StatusCode::BAD_REQUEST, "invalid_board"),
                    DomainError::InvalidTimings(_) => {
                        (StatusCode::BAD_REQUEST, "invalid_timings")
                    }
                    DomainError::Infrastructure(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                    }
                };
                (status, code, domain.to_string())
            }
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridventure_engine::domain::phase::TurnPhase;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_rejections_map_to_409() {
        for rejected in [
            IntentRejected::NotStarted,
            IntentRejected::AlreadyStarted,
            IntentRejected::TurnInProgress {
                phase: TurnPhase::Rolling,
            },
            IntentRejected::GameWon,
        ] {
            assert_eq!(status_of(rejected), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_cell_out_of_range_maps_to_400() {
        assert_eq!(
            status_of(DomainError::CellOutOfRange {
                cell: 0,
                cell_count: 100
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("lock poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_command_error_unwraps_to_its_source() {
        let err: ApiError = GameCommandError::Rejected(IntentRejected::GameWon).into();
        assert!(matches!(err, ApiError::Rejected(IntentRejected::GameWon)));
    }
}
