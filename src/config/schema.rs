//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Address the HTTP listener binds to. Fixed, not read from configuration.
pub const BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Root configuration for the league server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Game data (Riot API) client settings.
    pub riot: RiotConfig,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Ceiling on total handler execution in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Riot API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RiotConfig {
    /// API key sent as `X-Riot-Token`. Falls back to `RIOT_API_KEY` when empty.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Region used when a request carries no `region` query parameter.
    pub default_region: String,

    /// Platform API base URL. `{platform}` is replaced with the platform id.
    pub platform_url: String,

    /// Data Dragon CDN base URL.
    pub ddragon_url: String,

    /// Data Dragon data version (e.g. "10.16.1").
    pub ddragon_version: String,

    /// Data Dragon locale.
    pub locale: String,

    /// Per-call timeout for outbound requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_region: "na1".to_string(),
            platform_url: "https://{platform}.api.riotgames.com".to_string(),
            ddragon_url: "https://ddragon.leagueoflegends.com".to_string(),
            ddragon_version: "10.16.1".to_string(),
            locale: "en_US".to_string(),
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.timeouts.request_secs, 60);
        assert_eq!(config.riot.default_region, "na1");
        assert_eq!(config.observability.log_level, "info");
        assert!(config.riot.api_key.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [riot]
            default_region = "euw1"
            "#,
        )
        .unwrap();
        assert_eq!(config.riot.default_region, "euw1");
        assert_eq!(config.riot.locale, "en_US");
        assert_eq!(config.timeouts.request_secs, 60);
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = ServerConfig::default();
        config.riot.api_key = "RGAPI-secret".into();
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("RGAPI-secret"));
    }
}
