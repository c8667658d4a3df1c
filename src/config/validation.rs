//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. Returns every error found,
//! not just the first.

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::riot::Region;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("riot.request_timeout_secs must be greater than 0")]
    ZeroClientTimeout,

    #[error("riot.default_region '{0}' is not a known region")]
    UnknownDefaultRegion(String),

    #[error("riot.{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("riot.{0} must not be empty")]
    Empty(&'static str),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.riot.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroClientTimeout);
    }
    if config.riot.default_region.parse::<Region>().is_err() {
        errors.push(ValidationError::UnknownDefaultRegion(
            config.riot.default_region.clone(),
        ));
    }

    // The placeholder is not a valid host label, so check with a concrete platform.
    let platform_url = config.riot.platform_url.replace("{platform}", "na1");
    if url::Url::parse(&platform_url).is_err() {
        errors.push(ValidationError::InvalidUrl {
            field: "platform_url",
            value: config.riot.platform_url.clone(),
        });
    }
    if url::Url::parse(&config.riot.ddragon_url).is_err() {
        errors.push(ValidationError::InvalidUrl {
            field: "ddragon_url",
            value: config.riot.ddragon_url.clone(),
        });
    }
    if config.riot.ddragon_version.trim().is_empty() {
        errors.push(ValidationError::Empty("ddragon_version"));
    }
    if config.riot.locale.trim().is_empty() {
        errors.push(ValidationError::Empty("locale"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
