//! Game data types and error definitions.
//!
//! Field names follow the upstream JSON (camelCase). Fields the upstream may
//! omit fall back to defaults; anything not modelled here is carried through
//! in `extra` so responses are not truncated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors returned by a game data client.
#[derive(Debug, Error)]
pub enum GameDataError {
    /// The region string names no known platform.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    /// The requested resource does not exist upstream.
    #[error("{0} not found")]
    NotFound(String),

    /// Upstream answered 429.
    #[error("upstream rate limit exceeded")]
    RateLimited,

    /// Upstream did not answer within the client timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status} for {resource}")]
    Status { status: u16, resource: String },

    /// Connection or protocol failure.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// Upstream body was not the expected JSON.
    #[error("could not decode upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GameDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GameDataError::Timeout
        } else if err.is_decode() {
            GameDataError::Decode(err.to_string())
        } else {
            GameDataError::Transport(err.to_string())
        }
    }
}

/// Result type for game data operations.
pub type GameDataResult<T> = Result<T, GameDataError>;

/// summoner-v4 summoner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summoner {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i32,
    /// Epoch millis of last modification.
    pub revision_date: i64,
    pub summoner_level: i64,
}

/// league-v4 ranked entry for one queue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntry {
    pub league_id: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub summoner_id: String,
    pub summoner_name: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
}

/// A summoner together with their ranked standings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SummonerProfile {
    pub summoner: Summoner,
    pub leagues: Vec<LeagueEntry>,
}

/// match-v4 game data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub game_id: i64,
    pub platform_id: String,
    pub game_creation: i64,
    pub game_duration: i64,
    pub queue_id: i32,
    pub map_id: i32,
    pub season_id: i32,
    pub game_version: String,
    pub game_mode: String,
    pub game_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Champion difficulty ratings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

/// Data Dragon champion entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Champion {
    pub version: String,
    /// Champion id, e.g. "MonkeyKing".
    pub id: String,
    /// Numeric key as a string, e.g. "62".
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub info: ChampionInfo,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Data Dragon `champion.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionList {
    pub version: String,
    pub data: BTreeMap<String, Champion>,
}

impl ChampionList {
    /// Find a champion by numeric key, falling back to a case-insensitive id match.
    pub fn find_by_key(&self, key: &str) -> Option<&Champion> {
        let key = key.trim();
        self.data
            .values()
            .find(|c| c.key == key)
            .or_else(|| self.data.values().find(|c| c.id.eq_ignore_ascii_case(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_keeps_unmodelled_fields() {
        let raw = json!({
            "gameId": 2470104,
            "platformId": "NA1",
            "gameMode": "CLASSIC",
            "teams": [{"teamId": 100, "win": "Win"}],
            "participants": []
        });
        let game: Match = serde_json::from_value(raw).unwrap();
        assert_eq!(game.game_id, 2470104);
        assert_eq!(game.game_mode, "CLASSIC");
        assert_eq!(game.queue_id, 0);
        assert!(game.extra.contains_key("teams"));

        let back = serde_json::to_value(&game).unwrap();
        assert_eq!(back["teams"][0]["win"], "Win");
        assert_eq!(back["gameId"], 2470104);
    }

    #[test]
    fn test_summoner_tolerates_missing_fields() {
        let summoner: Summoner = serde_json::from_value(json!({
            "name": "Doublelift",
            "summonerLevel": 312
        }))
        .unwrap();
        assert_eq!(summoner.name, "Doublelift");
        assert_eq!(summoner.summoner_level, 312);
        assert!(summoner.puuid.is_empty());
    }

    #[test]
    fn test_find_champion_by_key_or_id() {
        let list: ChampionList = serde_json::from_value(json!({
            "version": "10.16.1",
            "data": {
                "Aatrox": {"id": "Aatrox", "key": "266", "name": "Aatrox"},
                "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong"}
            }
        }))
        .unwrap();

        assert_eq!(list.find_by_key("62").unwrap().name, "Wukong");
        assert_eq!(list.find_by_key("aatrox").unwrap().key, "266");
        assert!(list.find_by_key("9999").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = GameDataError::Status {
            status: 403,
            resource: "summoner 'x'".into(),
        };
        assert_eq!(err.to_string(), "upstream returned 403 for summoner 'x'");
        assert_eq!(GameDataError::NotFound("match 1".into()).to_string(), "match 1 not found");
    }
}
