//! Riot API client.
//!
//! # Responsibilities
//! - Resolve the caller's region string to a platform host
//! - Query summoner, league and match data from the platform API
//! - Query static champion data from Data Dragon
//! - Map upstream status codes and transport failures to `GameDataError`
//!
//! No caching, no retries. Every call goes upstream.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RiotConfig;
use crate::riot::region::Region;
use crate::riot::types::{
    Champion, ChampionList, GameDataError, GameDataResult, LeagueEntry, Match, Summoner,
    SummonerProfile,
};

/// The three lookups the HTTP handlers delegate to.
pub trait GameDataClient: Send + Sync + 'static {
    /// Summoner and ranked entries for `summoner_name` on `region`.
    /// An empty region selects the client's default.
    fn summoner_profile(
        &self,
        summoner_name: &str,
        region: &str,
    ) -> impl Future<Output = GameDataResult<SummonerProfile>> + Send;

    /// Game data for `match_id` on `region`.
    fn game_data(
        &self,
        match_id: i64,
        region: &str,
    ) -> impl Future<Output = GameDataResult<Match>> + Send;

    /// Static champion data by numeric key.
    fn champion_by_key(&self, key: &str) -> impl Future<Output = GameDataResult<Champion>> + Send;
}

/// HTTP client for the Riot platform API and Data Dragon.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    config: RiotConfig,
    default_region: Region,
}

impl RiotClient {
    /// Create a new client.
    ///
    /// Fails if the configured default region is unknown or the underlying
    /// HTTP client cannot be built.
    pub fn new(config: RiotConfig) -> GameDataResult<Self> {
        let default_region = config.default_region.parse()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        if config.api_key.is_empty() {
            tracing::warn!("No Riot API key configured; platform calls will be rejected upstream");
        }

        Ok(Self {
            http,
            config,
            default_region,
        })
    }

    fn resolve_region(&self, region: &str) -> GameDataResult<Region> {
        if region.trim().is_empty() {
            Ok(self.default_region)
        } else {
            region.parse()
        }
    }

    /// Platform API URL for `region` with percent-encoded path segments appended.
    fn platform_url(&self, region: Region, segments: &[&str]) -> GameDataResult<Url> {
        let base = self
            .config
            .platform_url
            .replace("{platform}", region.platform_id());
        join_segments(&base, segments)
    }

    fn champions_url(&self) -> GameDataResult<Url> {
        join_segments(
            &self.config.ddragon_url,
            &[
                "cdn",
                &self.config.ddragon_version,
                "data",
                &self.config.locale,
                "champion.json",
            ],
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: String,
        authenticated: bool,
    ) -> GameDataResult<T> {
        tracing::debug!(url = %url, "Querying game data upstream");

        let mut request = self.http.get(url);
        if authenticated {
            request = request.header("X-Riot-Token", &self.config.api_key);
        }
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(GameDataError::NotFound(resource)),
            StatusCode::TOO_MANY_REQUESTS => Err(GameDataError::RateLimited),
            status => {
                tracing::warn!(status = %status, resource = %resource, "Upstream error status");
                Err(GameDataError::Status {
                    status: status.as_u16(),
                    resource,
                })
            }
        }
    }

    /// summoner-v4 lookup by summoner name.
    pub async fn summoner_by_name(&self, region: Region, name: &str) -> GameDataResult<Summoner> {
        let url = self.platform_url(
            region,
            &["lol", "summoner", "v4", "summoners", "by-name", name],
        )?;
        self.get_json(url, format!("summoner '{}'", name), true).await
    }

    /// league-v4 entries for an encrypted summoner id.
    pub async fn league_entries(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> GameDataResult<Vec<LeagueEntry>> {
        let url = self.platform_url(
            region,
            &["lol", "league", "v4", "entries", "by-summoner", summoner_id],
        )?;
        self.get_json(url, format!("league entries for '{}'", summoner_id), true)
            .await
    }

    /// match-v4 lookup by game id.
    pub async fn match_by_id(&self, region: Region, match_id: i64) -> GameDataResult<Match> {
        let id = match_id.to_string();
        let url = self.platform_url(region, &["lol", "match", "v4", "matches", &id])?;
        self.get_json(url, format!("match {}", match_id), true).await
    }

    /// Full Data Dragon champion list.
    pub async fn champions(&self) -> GameDataResult<ChampionList> {
        let url = self.champions_url()?;
        self.get_json(url, "champion list".to_string(), false).await
    }
}

impl GameDataClient for RiotClient {
    async fn summoner_profile(
        &self,
        summoner_name: &str,
        region: &str,
    ) -> GameDataResult<SummonerProfile> {
        let region = self.resolve_region(region)?;
        let summoner = self.summoner_by_name(region, summoner_name).await?;
        let leagues = self.league_entries(region, &summoner.id).await?;
        Ok(SummonerProfile { summoner, leagues })
    }

    async fn game_data(&self, match_id: i64, region: &str) -> GameDataResult<Match> {
        let region = self.resolve_region(region)?;
        self.match_by_id(region, match_id).await
    }

    async fn champion_by_key(&self, key: &str) -> GameDataResult<Champion> {
        let champions = self.champions().await?;
        champions
            .find_by_key(key)
            .cloned()
            .ok_or_else(|| GameDataError::NotFound(format!("champion '{}'", key)))
    }
}

fn join_segments(base: &str, segments: &[&str]) -> GameDataResult<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| GameDataError::Transport(format!("invalid base URL '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| GameDataError::Transport(format!("base URL '{}' cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
