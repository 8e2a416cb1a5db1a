//! Client configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::endpoints::Endpoints;
use crate::error::{CloudValidError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CLOUDVALID_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "CLOUDVALID_BASE_URL";

/// Default `User-Agent` sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("cloudvalid-client/", env!("CARGO_PKG_VERSION"));

/// Everything a [`CloudValidClient`](crate::CloudValidClient) needs.
///
/// Timeouts are unset by default, leaving reqwest's own behavior in place.
#[derive(Clone)]
pub struct ClientConfig {
    /// Key appended to every request as the `api_key` query parameter.
    pub api_key: String,
    pub endpoints: Endpoints,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    /// Overrides the default `cloudvalid-client/<version>` user agent.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
            connect_timeout: None,
            request_timeout: None,
            user_agent: None,
        }
    }

    /// Read [`API_KEY_ENV`] (required) and [`BASE_URL_ENV`] (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| CloudValidError::Config {
            detail: format!("{API_KEY_ENV} is not set"),
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.endpoints = Endpoints::with_base_url(&base_url);
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Shorthand for `with_endpoints(Endpoints::with_base_url(base_url))`.
    #[must_use]
    pub fn with_base_url(self, base_url: &str) -> Self {
        self.with_endpoints(Endpoints::with_base_url(base_url))
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(CloudValidError::Config {
                detail: "api key is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Build the reqwest transport described by this config.
    pub(crate) fn build_http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(
            self.user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(|e| CloudValidError::Config {
            detail: format!("failed to create HTTP client: {e}"),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
