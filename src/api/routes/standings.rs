use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Pairing, StandingEntry};

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingEntry>,
}

#[derive(Debug, Serialize)]
pub struct PairingsResponse {
    pub pairings: Vec<Pairing>,
}

pub async fn player_standings(
    State(state): State<AppState>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let tournament = state.tournament.lock().await;
    let standings = tournament.player_standings()?;
    Ok(Json(StandingsResponse { standings }))
}

pub async fn swiss_pairings(
    State(state): State<AppState>,
) -> Result<Json<PairingsResponse>, ApiError> {
    let tournament = state.tournament.lock().await;
    let pairings = tournament.swiss_pairings()?;
    Ok(Json(PairingsResponse { pairings }))
}
