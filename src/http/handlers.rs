//! Endpoint handlers.
//!
//! Each handler extracts its parameters, delegates to the game data client
//! and serializes the result. Summoner and match results are wrapped in a
//! single-key envelope; the champion is returned as-is.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::riot::{Champion, GameDataClient, Match, SummonerProfile};

/// Body of `GET /`.
pub const WELCOME: &str = "Welcome to the League of Draaaaven";

/// `?region=` query. Absent and empty both mean "client default".
#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Serialize)]
pub struct SummonerStatsResponse {
    #[serde(rename = "summonerProfile")]
    pub summoner_profile: SummonerProfile,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub game: Match,
}

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn summoner_stats<C: GameDataClient>(
    State(state): State<AppState<C>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> ApiResult<Json<SummonerStatsResponse>> {
    let Path(summoner_name) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let summoner_profile = state
        .client
        .summoner_profile(&summoner_name, &query.region)
        .await?;

    Ok(Json(SummonerStatsResponse { summoner_profile }))
}

pub async fn match_detail<C: GameDataClient>(
    State(state): State<AppState<C>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> ApiResult<Json<MatchResponse>> {
    let Path(raw_id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let match_id = parse_match_id(&raw_id)?;

    let game = state.client.game_data(match_id, &query.region).await?;

    Ok(Json(MatchResponse { game }))
}

pub async fn champion_by_key<C: GameDataClient>(
    State(state): State<AppState<C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Champion>> {
    let Path(key) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let champion = state.client.champion_by_key(&key).await?;
    Ok(Json(champion))
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

fn parse_match_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!(match_id = %raw, error = %e, "Rejecting malformed match id");
        ApiError::BadRequest(format!("invalid match id '{}': {}", raw, e))
    })
}
