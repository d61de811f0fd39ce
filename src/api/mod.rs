//! REST API endpoints.
//!
//! Axum-based HTTP API for registering players, reporting results and
//! reading standings and next-round pairings.

pub mod routes;
pub mod state;

use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::tournament::TournamentError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Odd player count: {0}")]
    OddPlayerCount(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match err {
            TournamentError::Validation(_) => ApiError::BadRequest(err.to_string()),
            TournamentError::ReferentialIntegrity(_) => ApiError::Conflict(err.to_string()),
            TournamentError::OddPlayerCount(_) => ApiError::OddPlayerCount(err.to_string()),
            TournamentError::StoreUnavailable(_) => ApiError::Unavailable(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "REFERENTIAL_INTEGRITY"),
            ApiError::OddPlayerCount(_) => (StatusCode::CONFLICT, "ODD_PLAYER_COUNT"),
            ApiError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    build_router_with_cors(state, "*")
}

/// Build the application router, allowing the given CORS origin
/// (`"*"` for any).
pub fn build_router_with_cors(state: AppState, cors_origin: &str) -> Router {
    let cors = if cors_origin == "*" {
        CorsLayer::new().allow_origin(Any)
    } else {
        match cors_origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new().allow_origin(origin),
            Err(e) => {
                // No allowed origin: cross-origin requests get no CORS headers
                warn!("Invalid CORS origin {:?}: {}", cors_origin, e);
                CorsLayer::new()
            }
        }
    }
    .allow_methods(Any)
    .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/players",
            get(routes::players::list_players)
                .post(routes::players::register_player)
                .delete(routes::players::delete_players),
        )
        .route(
            "/api/matches",
            get(routes::matches::list_matches)
                .post(routes::matches::report_match)
                .delete(routes::matches::delete_matches),
        )
        .route("/api/standings", get(routes::standings::player_standings))
        .route("/api/pairings", get(routes::standings::swiss_pairings))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
