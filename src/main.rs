//! League API server.
//!
//! ```text
//!   client ──▶ CORS ─▶ request id ─▶ real ip ─▶ access log ─▶ recover ─▶ timeout ─▶ router
//!                                                                                     │
//!                                   ┌────────────────────┬───────────────────────────┤
//!                                   ▼                    ▼                           ▼
//!                           /v1/summoner/…/stats   /v1/match/{id}        /v1/champion/{key}
//!                                   │                    │                           │
//!                                   └──────────── GameDataClient (RiotClient) ───────┘
//!                                                        │
//!                                          Riot platform API / Data Dragon
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use league_server::config::{load_config, ServerConfig, BIND_ADDRESS};
use league_server::lifecycle::{signals, Shutdown};
use league_server::observability::init_tracing;
use league_server::{HttpServer, RiotClient};

#[derive(Parser)]
#[command(name = "league-server")]
#[command(about = "HTTP API for League of Legends summoner, match and champion data", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                init_tracing(&ServerConfig::default().observability.log_level);
                tracing::error!(path = %path.display(), error = %e, "Failed to load configuration");
                return Err(e.into());
            }
        },
        None => ServerConfig::default(),
    };

    init_tracing(&config.observability.log_level);
    tracing::info!("league-server v{} starting", env!("CARGO_PKG_VERSION"));

    if config.riot.api_key.is_empty() {
        if let Ok(key) = std::env::var("RIOT_API_KEY") {
            config.riot.api_key = key;
        }
    }

    tracing::info!(
        config_file = ?cli.config,
        default_region = %config.riot.default_region,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let client = match RiotClient::new(config.riot.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build game data client");
            return Err(e.into());
        }
    };

    let listener = match TcpListener::bind(BIND_ADDRESS).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = BIND_ADDRESS, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let server = HttpServer::new(config, client);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
