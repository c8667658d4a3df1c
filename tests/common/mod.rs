//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use league_server::config::ServerConfig;
use league_server::lifecycle::Shutdown;
use league_server::riot::{
    Champion, GameDataClient, GameDataError, GameDataResult, Match, Summoner, SummonerProfile,
};
use league_server::HttpServer;
use tokio::net::TcpListener;

/// How a [`FakeClient`] answers every call.
#[derive(Debug, Clone)]
pub enum Behavior {
    Succeed,
    NotFound,
    Unreachable,
    Panic,
    Stall(Duration),
}

/// In-process game data client that records what it was asked.
#[derive(Debug)]
pub struct FakeClient {
    behavior: Behavior,
    pub calls: Mutex<Vec<Call>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Summoner { name: String, region: String },
    Game { match_id: i64, region: String },
    Champion { key: String },
}

impl FakeClient {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn act(&self, call: Call) -> GameDataResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::NotFound => Err(GameDataError::NotFound("thing".into())),
            Behavior::Unreachable => Err(GameDataError::Transport("connection refused".into())),
            Behavior::Panic => panic!("fake client exploded"),
            Behavior::Stall(d) => {
                tokio::time::sleep(*d).await;
                Ok(())
            }
        }
    }
}

impl GameDataClient for FakeClient {
    async fn summoner_profile(
        &self,
        summoner_name: &str,
        region: &str,
    ) -> GameDataResult<SummonerProfile> {
        self.act(Call::Summoner {
            name: summoner_name.to_string(),
            region: region.to_string(),
        })
        .await?;
        Ok(SummonerProfile {
            summoner: Summoner {
                name: summoner_name.to_string(),
                summoner_level: 30,
                ..Summoner::default()
            },
            leagues: Vec::new(),
        })
    }

    async fn game_data(&self, match_id: i64, region: &str) -> GameDataResult<Match> {
        self.act(Call::Game {
            match_id,
            region: region.to_string(),
        })
        .await?;
        Ok(Match {
            game_id: match_id,
            game_mode: "CLASSIC".into(),
            ..Match::default()
        })
    }

    async fn champion_by_key(&self, key: &str) -> GameDataResult<Champion> {
        self.act(Call::Champion {
            key: key.to_string(),
        })
        .await?;
        Ok(Champion {
            id: "Aatrox".into(),
            key: key.to_string(),
            name: "Aatrox".into(),
            ..Champion::default()
        })
    }
}

/// Start a server on an ephemeral port. Keep the returned `Shutdown` alive
/// for as long as the server should run.
pub async fn start_server<C: GameDataClient>(client: C) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServerConfig::default(), client);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Serve `router` as a stand-in upstream on an ephemeral port.
pub async fn start_mock_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}
