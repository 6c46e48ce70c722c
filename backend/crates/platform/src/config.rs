//! Environment Configuration Helpers
//!
//! Small typed readers over process environment variables. Parsing is split
//! from lookup so values can be validated without touching the environment.

use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Read a string variable, falling back to `default` when unset or empty
pub fn env_or(key: &str, default: &str) -> String {
    parse_or(env::var(key).ok(), default)
}

/// Read a millisecond duration variable, falling back to `default`
pub fn env_duration_ms(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    parse_duration_ms(key, env::var(key).ok(), default)
}

pub fn parse_or(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

pub fn parse_duration_ms(
    key: &str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };

    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        })
}
