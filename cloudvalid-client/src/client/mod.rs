//! CloudValid API client

mod api;
mod http;

use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::{Endpoints, expand_id};
use crate::error::{CloudValidError, Result};
use crate::types::Operation;
use crate::utils::log_sanitizer::API_KEY_PARAM;

/// Client for the CloudValid DNS configuration API.
///
/// Holds the API key, the endpoint templates and one reqwest transport.
/// `reqwest::Client` is reference counted internally, so a `CloudValidClient`
/// can be shared (e.g. behind an `Arc`) and called from many tasks at once.
/// The four calls live on the [`DnsConfigurationApi`](crate::DnsConfigurationApi) trait.
pub struct CloudValidClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
}

impl CloudValidClient {
    /// Client for the production API with default transport settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Client built from `config`, with its own transport.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = config.build_http_client()?;
        Ok(Self { client, config })
    }

    /// Client reusing an existing transport.
    ///
    /// The timeout and user agent settings of `config` are ignored; `client`
    /// keeps its own.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Client configured from `CLOUDVALID_API_KEY` / `CLOUDVALID_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.config.endpoints
    }

    /// Resolve the URL of `operation`: substitute `id` into the template,
    /// then append the API key.
    pub(crate) fn request_url(&self, operation: Operation, id: Option<&str>) -> Result<Url> {
        let template = self.config.endpoints.template(operation);
        let link = match id {
            Some(id) => expand_id(template, id),
            None => template.to_string(),
        };
        self.add_api_key_param(&link, operation)
    }

    /// Append `api_key=<key>` to `link`.
    ///
    /// Query parameters already on `link` keep their order and `api_key` goes
    /// last. Keys are not sorted, so a template's own parameter order reaches
    /// the server unchanged. The whole query string is re-encoded as
    /// `application/x-www-form-urlencoded`.
    pub(crate) fn add_api_key_param(&self, link: &str, operation: Operation) -> Result<Url> {
        let mut url = Url::parse(link).map_err(|e| CloudValidError::InvalidUrl {
            operation,
            url: link.to_string(),
            detail: e.to_string(),
        })?;

        let existing: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(existing)
            .append_pair(API_KEY_PARAM, &self.config.api_key);

        Ok(url)
    }
}
