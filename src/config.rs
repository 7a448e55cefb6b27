//! Client configuration
//!
//! Configuration comes from the environment (optionally seeded from a `.env`
//! file). The API key is mandatory; everything else has a default.
//!
//! | Variable                 | Default                          |
//! |--------------------------|----------------------------------|
//! | `OPENSEA_API_KEY`        | required                         |
//! | `OPENSEA_BASE_URL`       | `https://api.opensea.io/api/v2`  |
//! | `OPENSEA_TIMEOUT_SECS`   | `30`                             |
//! | `OPENSEA_PAGE_DELAY_MS`  | `500`                            |

use crate::error::{Error, Result};
use crate::http::DEFAULT_USER_AGENT;
use crate::pagination::CursorPaginator;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "OPENSEA_API_KEY";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "OPENSEA_BASE_URL";
/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "OPENSEA_TIMEOUT_SECS";
/// Environment variable overriding the pause between pages (milliseconds)
pub const ENV_PAGE_DELAY_MS: &str = "OPENSEA_PAGE_DELAY_MS";

/// Base URL of the public v2 API
pub const DEFAULT_BASE_URL: &str = "https://api.opensea.io/api/v2";

/// Settings for [`OpenSeaClient`](crate::OpenSeaClient)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent as `x-api-key`
    pub api_key: String,
    /// Base URL all resource paths are joined onto
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause between consecutive page fetches
    pub page_delay: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with defaults and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            page_delay: CursorPaginator::DEFAULT_DELAY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between pages
    #[must_use]
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::config(format!("failed to load .env file: {e}"))),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = value(ENV_API_KEY) else {
            error!("API key not found in environment variables");
            return Err(Error::missing_field(ENV_API_KEY));
        };

        let mut config = Self::new(api_key);
        if let Some(base_url) = value(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(secs) = value(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_var(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(ms) = value(ENV_PAGE_DELAY_MS) {
            config.page_delay = Duration::from_millis(parse_var(ENV_PAGE_DELAY_MS, &ms)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field(ENV_API_KEY));
        }

        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_config(
                ENV_BASE_URL,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::invalid_config(ENV_TIMEOUT_SECS, "must be positive"));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("page_delay", &self.page_delay)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| Error::invalid_config(key, format!("'{raw}': {e}")))
}
