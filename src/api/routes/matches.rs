use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{MatchRecord, PlayerId};

#[derive(Debug, Deserialize)]
pub struct ReportMatchRequest {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchRecord>,
    pub count: usize,
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let tournament = state.tournament.lock().await;
    let matches = tournament.matches()?;
    let count = matches.len();
    Ok(Json(MatchesResponse { matches, count }))
}

pub async fn report_match(
    State(state): State<AppState>,
    payload: Result<Json<ReportMatchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MatchRecord>), ApiError> {
    let Json(req) = payload?;
    let mut tournament = state.tournament.lock().await;
    let record = tournament.report_match(req.winner_id, req.loser_id)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_matches(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let mut tournament = state.tournament.lock().await;
    tournament.delete_matches()?;
    Ok(StatusCode::NO_CONTENT)
}
