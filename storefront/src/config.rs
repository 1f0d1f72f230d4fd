//! Client configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `STOREFRONT_API_URL` | `http://localhost:8000/api` |
//! | `STOREFRONT_TIMEOUT_SECS` | `10` (1 to 300) |
//! | `STOREFRONT_SESSION_FILE` | `<data_local_dir>/storefront/session.json` |
//!
//! The binary loads a `.env` file with `dotenvy` before reading these.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),

    #[error("Timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend API, without trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Where the session is persisted
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: default_session_file(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, then validate it
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("STOREFRONT_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match std::env::var("STOREFRONT_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "STOREFRONT_TIMEOUT_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_file = std::env::var("STOREFRONT_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let config = Self {
            api_url,
            timeout_secs,
            session_file,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront")
        .join("session.json")
}
