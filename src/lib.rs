//! League API server library.
//!
//! A small HTTP façade over the Riot game data APIs: summoner stats, match
//! detail and champion lookup, each delegated to a [`riot::GameDataClient`].

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod riot;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use riot::{GameDataClient, RiotClient};
