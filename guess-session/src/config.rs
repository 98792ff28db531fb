use guess_core::{DEFAULT_COOLDOWN, DEFAULT_NOTIFICATION_TTL, RoundTimings};
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const COOLDOWN_MS_VAR: &str = "UNDER_OVER_COOLDOWN_MS";
pub const NOTIFICATION_MS_VAR: &str = "UNDER_OVER_NOTIFICATION_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected milliseconds)")]
    InvalidMillis { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cooldown_ms: u64,
    pub notification_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            cooldown_ms: read_millis(&lookup, COOLDOWN_MS_VAR, DEFAULT_COOLDOWN)?,
            notification_ms: read_millis(&lookup, NOTIFICATION_MS_VAR, DEFAULT_NOTIFICATION_TTL)?,
        })
    }

    pub fn timings(&self) -> RoundTimings {
        RoundTimings::new(
            Duration::from_millis(self.cooldown_ms),
            Duration::from_millis(self.notification_ms),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            notification_ms: DEFAULT_NOTIFICATION_TTL.as_millis() as u64,
        }
    }
}

fn read_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<u64, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidMillis {
                key: key.to_string(),
                value,
            }),
        None => Ok(default.as_millis() as u64),
    }
}
