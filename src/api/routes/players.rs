use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Player;

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletePlayersResponse {
    pub deleted: usize,
}

pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let tournament = state.tournament.lock().await;
    let players = tournament.players()?;
    let count = players.len();
    Ok(Json(PlayersResponse { players, count }))
}

pub async fn register_player(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(req) = payload?;
    let mut tournament = state.tournament.lock().await;
    let player = tournament.register_player(&req.name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn delete_players(
    State(state): State<AppState>,
) -> Result<Json<DeletePlayersResponse>, ApiError> {
    let mut tournament = state.tournament.lock().await;
    let deleted = tournament.delete_players()?;
    Ok(Json(DeletePlayersResponse { deleted }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_register_and_list_players() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let (status, json) = post_json(
            build_router(state.clone()),
            "/api/players",
            r#"{"name":"Alice"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");

        post_json(build_router(state.clone()), "/api/players", r#"{"name":"Bob"}"#).await;

        let (status, json) = get_json(build_router(state), "/api/players").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["players"][1]["name"], "Bob");
    }

    #[tokio::test]
    async fn test_register_empty_name() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = post_json(app, "/api/players", r#"{"name":"  "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_register_malformed_body() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let (status, json) =
            post_json(build_router(state.clone()), "/api/players", r#"{"nam":"A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");

        let (status, json) = post_json(build_router(state), "/api/players", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_delete_players_fresh() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = send(app, "DELETE", "/api/players", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["deleted"], 0);
    }
}
