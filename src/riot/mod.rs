//! Game data subsystem.
//!
//! # Data Flow
//! ```text
//! handler (summoner name / match id / champion key, region string)
//!     → GameDataClient trait (client.rs)
//!     → RiotClient: region.rs resolves the platform host
//!     → reqwest GET with X-Riot-Token (platform API) or plain (Data Dragon)
//!     → types.rs DTOs, or GameDataError
//! ```
//!
//! # Design Decisions
//! - Handlers depend on the trait, so tests swap in fakes
//! - Upstream data is trusted; omitted fields default
//! - No caching and no retries; every call goes upstream

pub mod client;
pub mod region;
pub mod types;

pub use client::{GameDataClient, RiotClient};
pub use region::Region;
pub use types::{
    Champion, ChampionList, GameDataError, GameDataResult, LeagueEntry, Match, Summoner,
    SummonerProfile,
};
