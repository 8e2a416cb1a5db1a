//! # cloudvalid-client
//!
//! Typed async client for the [CloudValid](https://cloudvalid.com) DNS
//! configuration link API.
//!
//! A configuration link is a vendor-hosted page that walks an end user through
//! publishing the DNS records a service needs on their domain. This crate
//! builds the authenticated requests and decodes the vendor's JSON; record
//! verification happens on CloudValid's side and is only reported back.
//!
//! ## Operations
//!
//! | Call | Method | Endpoint | Returns |
//! |------|--------|----------|---------|
//! | [`create_dns_configuration_link`](DnsConfigurationApi::create_dns_configuration_link) | `POST` | `/dns-config/create-dns-configuration-link` | [`DnsConfigurationLink`] |
//! | [`get_hosted_page`](DnsConfigurationApi::get_hosted_page) | `GET` | `/dns-config/get-hosted-page/{id}` | [`HostedPage`] |
//! | [`get_propagation_status`](DnsConfigurationApi::get_propagation_status) | `GET` | `/dns-config/get-propagation-status/{id}` | `Vec<`[`PropagationRecordStatus`]`>` |
//! | [`cancel_dns_configuration_link`](DnsConfigurationApi::cancel_dns_configuration_link) | `POST` | `/dns-config/get-propagation-status/{id}` | [`CancelledDnsConfigurationLink`] |
//!
//! The API key travels as the `api_key` query parameter on every request.
//! Only `200 OK` counts as success.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudvalid_client::{
//!     CloudValidClient, CreateDnsConfigurationLinkRequest, DnsConfigurationApi,
//!     PropagationRecordStatus,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudValidClient::new("your-api-key")?;
//!
//!     // 1. Create a link and send the end user to it
//!     let request = CreateDnsConfigurationLinkRequest::new("example.com").with_use_case("mx");
//!     let link = client.create_dns_configuration_link(&request).await?;
//!     println!("send the user to {}", link.public_url);
//!
//!     // 2. Later: check propagation
//!     let statuses = client.get_propagation_status(&link.id).await?;
//!     for status in PropagationRecordStatus::pending(&statuses) {
//!         println!("{} {} -> {}", status.record_type, status.host, status.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Result<T, CloudValidError>`](CloudValidError). Each
//! error names the [`Operation`] that failed:
//!
//! - [`CloudValidError::UnexpectedStatus`]: any status other than 200; only the code is kept
//! - [`CloudValidError::ParseError`]: the body was not the expected JSON
//! - [`CloudValidError::NetworkError`] / [`CloudValidError::Timeout`]: transport failures
//!
//! Nothing is retried. Polling and retry policy belong to the caller.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade. Request
//! URLs are logged with the API key redacted.

mod client;
mod config;
mod endpoints;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::CloudValidClient;

pub use config::{API_KEY_ENV, BASE_URL_ENV, ClientConfig};

pub use endpoints::{DEFAULT_BASE_URL, Endpoints, ID_PLACEHOLDER, expand_id};

pub use error::{CloudValidError, Result};

pub use traits::DnsConfigurationApi;

pub use types::{
    CancelledDnsConfigurationLink, CreateDnsConfigurationLinkRequest, DnsConfigurationLink,
    DnsProviderGuess, HostedPage, HostedPageClient, LinkRecord, Operation,
    PropagationRecordStatus, RawDnsRecord, Template, TemplateRecord,
};

pub use utils::datetime;
