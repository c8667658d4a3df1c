//! Route table.
//!
//! Only `GET` is registered. Any other method on a known path, and any
//! unknown path, lands in the JSON not-found fallback.

use axum::{routing::get, Router};

use crate::http::handlers::{champion_by_key, match_detail, not_found, summoner_stats, welcome};
use crate::http::server::AppState;
use crate::riot::GameDataClient;

pub fn routes<C: GameDataClient>() -> Router<AppState<C>> {
    Router::new()
        .route("/", get(welcome).fallback(not_found))
        .route(
            "/v1/summoner/{summonername}/stats",
            get(summoner_stats::<C>).fallback(not_found),
        )
        .route(
            "/v1/match/{matchid}",
            get(match_detail::<C>).fallback(not_found),
        )
        .route(
            "/v1/champion/{championkey}",
            get(champion_by_key::<C>).fallback(not_found),
        )
        .fallback(not_found)
}
