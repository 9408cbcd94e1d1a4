//! Client configuration, built once at startup.
//!
//! # Design
//! All environment parsing lives in `Configuration::from_lookup`; the rest of
//! the crate only sees typed fields. Unset or empty variables fall back to
//! defaults, malformed ones are rejected instead of silently becoming zero.
//! A `.env` file supplies values the process environment leaves unset.
//! Retry count, minimum content length and the initial backoff delay are
//! fixed and not read from the environment.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::retry::{DEFAULT_INITIAL_DELAY, DEFAULT_MAX_RETRIES};
use crate::validate::{validate, ValidationResult};

pub const ENV_BASE_URL: &str = "TREEHOLE_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "TREEHOLE_API_TIMEOUT";
pub const ENV_MAX_LENGTH: &str = "TREEHOLE_MAX_LENGTH";
pub const ENV_REFRESH_INTERVAL_MS: &str = "TREEHOLE_REFRESH_INTERVAL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 140;
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 1;
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    NonPositive { var: &'static str },

    #[error("failed to load .env file: {0}")]
    EnvFile(String),
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::EnvFile(err.to_string())
    }
}

/// Immutable settings shared by the API client, validator and retry layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_initial_delay: Duration,
    pub max_content_length: usize,
    pub min_content_length: usize,
    /// How often a UI should reload the message list.
    pub refresh_interval: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_initial_delay: DEFAULT_INITIAL_DELAY,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
        }
    }
}

impl Configuration {
    /// Load from the process environment, falling back to the nearest `.env`
    /// file in the current directory or its parents.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TREEHOLE_API_BASE_URL` | `http://127.0.0.1:8000` |
    /// | `TREEHOLE_API_TIMEOUT` (ms) | `10000` |
    /// | `TREEHOLE_MAX_LENGTH` | `140` |
    /// | `TREEHOLE_REFRESH_INTERVAL` (ms) | `30000` |
    ///
    /// A missing `.env` is not an error; a malformed one is.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = match dotenvy::dotenv_iter() {
            Ok(iter) => read_pairs(iter)?,
            Err(err) if err.not_found() => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Self::from_lookup(with_file_fallback(|var| std::env::var(var).ok(), &file))
    }

    /// Like [`Configuration::from_env`], but reads the given env file, which
    /// must exist.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = read_pairs(dotenvy::from_path_iter(path)?)?;
        Self::from_lookup(with_file_fallback(|var| std::env::var(var).ok(), &file))
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let base_url = read(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_ms = positive(ENV_TIMEOUT_MS, read(ENV_TIMEOUT_MS), DEFAULT_TIMEOUT_MS)?;
        let max_content_length = positive(
            ENV_MAX_LENGTH,
            read(ENV_MAX_LENGTH),
            DEFAULT_MAX_CONTENT_LENGTH as u64,
        )? as usize;
        let refresh_ms = positive(
            ENV_REFRESH_INTERVAL_MS,
            read(ENV_REFRESH_INTERVAL_MS),
            DEFAULT_REFRESH_INTERVAL_MS,
        )?;

        let config = Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            max_content_length,
            refresh_interval: Duration::from_millis(refresh_ms),
            ..Self::default()
        };
        debug!(?config, "loaded client configuration");
        Ok(config)
    }

    /// Validate message content against the configured length bounds.
    pub fn validate_content(&self, content: &str) -> ValidationResult {
        validate(content, self.max_content_length, self.min_content_length)
    }
}

fn read_pairs<I>(iter: I) -> Result<HashMap<String, String>, ConfigError>
where
    I: Iterator<Item = Result<(String, String), dotenvy::Error>>,
{
    iter.map(|pair| pair.map_err(ConfigError::from)).collect()
}

/// Values from `primary` win; blank ones count as unset.
fn with_file_fallback<'a, P>(
    primary: P,
    file: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    P: Fn(&str) -> Option<String> + 'a,
{
    move |var: &str| {
        primary(var)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| file.get(var).cloned())
    }
}

fn positive(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.clone(),
        })?;
    if value == 0 {
        return Err(ConfigError::NonPositive { var });
    }
    Ok(value)
}
