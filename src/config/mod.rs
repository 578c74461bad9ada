//! Runtime configuration for the HTTP page fetcher.
//!
//! Values come from environment variables with development defaults, so the
//! binary works out of the box and deployments can tune timeouts and limits
//! without a config file.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const ENV_USER_AGENT: &str = "ECOMPARSE_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "ECOMPARSE_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ECOMPARSE_REQUEST_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "ECOMPARSE_MAX_BODY_BYTES";
pub const ENV_MAX_REDIRECTS: &str = "ECOMPARSE_MAX_REDIRECTS";

const DEFAULT_USER_AGENT: &str = "ecomparse/0.1";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB
const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    user_agent: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    max_body_bytes: u64,
    max_redirects: usize,
}

impl Config {
    pub fn new(
        user_agent: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
        max_body_bytes: u64,
        max_redirects: usize,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout,
            request_timeout,
            max_body_bytes,
            max_redirects,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// Numeric variables must parse and be non-zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let connect_timeout_secs =
            positive_from_env(ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let request_timeout_secs =
            positive_from_env(ENV_REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let max_body_bytes = positive_from_env(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?;
        let max_redirects = positive_from_env(ENV_MAX_REDIRECTS, DEFAULT_MAX_REDIRECTS as u64)?;

        Ok(Self {
            user_agent,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_bytes,
            max_redirects: usize::try_from(max_redirects).map_err(|e| {
                ConfigError::InvalidValue {
                    field: ENV_MAX_REDIRECTS,
                    reason: e.to_string(),
                }
            })?,
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
    pub fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes
    }
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_USER_AGENT,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            DEFAULT_MAX_BODY_BYTES,
            DEFAULT_MAX_REDIRECTS,
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn positive_from_env(field: &'static str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = env::var(field) else {
        return Ok(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            field,
            reason: format!("{raw:?} is not a number: {e}"),
        }),
    }
}
