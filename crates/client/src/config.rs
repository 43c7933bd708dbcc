//! Client configuration.
//!
//! Configuration problems are construction-time errors; a transport is never
//! built from an invalid [`Config`].

use std::time::Duration;

use crate::error::{Error, Result};

/// Base URL of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.oncall.io";

/// Per-request timeout applied when none is configured explicitly.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API token (required by [`Config::from_env`]).
pub const TOKEN_ENV_VAR: &str = "ONCALL_API_TOKEN";

/// Environment variable overriding the base URL (optional).
pub const BASE_URL_ENV_VAR: &str = "ONCALL_API_URL";

/// Settings for the reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the request path is joined onto. No trailing slash required.
    pub base_url: String,
    /// API token sent as `Authorization: Token token=<token>` on every request.
    pub token: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Whole-request timeout, covering connection and body read.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration for the production API with default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            user_agent: concat!("oncall-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `ONCALL_API_TOKEN` is required; `ONCALL_API_URL` optionally overrides
    /// the production base URL.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| Error::Config {
            message: format!("{TOKEN_ENV_VAR} is not set"),
        })?;

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
