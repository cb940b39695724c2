//! # Client Configuration Module
//!
//! Loads configuration for the slotbook client from environment variables,
//! with defaults where a sensible one exists.
//!
//! ## Environment Variables
//!
//! - `API_BASE_URL`: Base URL of the marketplace API (required)
//! - `API_TOKEN`: Bearer token of the signed-in user (optional)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: HTTP request timeout (default: 30)
//! - `CACHE_TTL_SECONDS`: How long fetched queries stay fresh (default: 60)

use eyre::{Result, WrapErr};
use std::{env, time::Duration};
use tracing::Level;

/// Configuration for the slotbook client.
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotbook_client::config::ClientConfig;
///
/// fn example() -> Result<()> {
///     let config = ClientConfig::from_env()?;
///     println!("Talking to {}", config.api_base_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace API, without a trailing slash
    pub api_base_url: String,

    /// Bearer token for the current user, if signed in
    pub api_token: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Query cache freshness in seconds
    pub cache_ttl: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_BASE_URL environment variable is not set
    /// - API_REQUEST_TIMEOUT_SECONDS or CACHE_TTL_SECONDS is set but not a number
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .wrap_err("API_BASE_URL environment variable must be set")?;

        let api_token = env::var("API_TOKEN").ok().filter(|token| !token.is_empty());

        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        let cache_ttl = env::var("CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .wrap_err("Invalid CACHE_TTL_SECONDS value")?;

        Ok(Self::new(api_base_url)
            .with_token(api_token)
            .with_log_level(log_level)
            .with_request_timeout(request_timeout)
            .with_cache_ttl(cache_ttl))
    }

    /// Builds a configuration with defaults for everything but the base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            log_level: Level::INFO,
            request_timeout: 30,
            cache_ttl: 60,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    pub fn with_cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl = seconds;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Unknown levels fall back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
