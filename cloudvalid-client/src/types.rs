use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::nullable;

// ============ Operations ============

/// The four calls the CloudValid API exposes.
///
/// Serialized and displayed as the vendor's endpoint slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// `POST /dns-config/create-dns-configuration-link`
    CreateDnsConfigurationLink,
    /// `GET /dns-config/get-hosted-page/{id}`
    GetHostedPage,
    /// `GET /dns-config/get-propagation-status/{id}`
    GetPropagationStatus,
    /// `POST` to the cancel template (the status path by default)
    CancelDnsConfigurationLink,
}

impl Operation {
    /// The endpoint slug, e.g. `"get-hosted-page"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateDnsConfigurationLink => "create-dns-configuration-link",
            Self::GetHostedPage => "get-hosted-page",
            Self::GetPropagationStatus => "get-propagation-status",
            Self::CancelDnsConfigurationLink => "cancel-dns-configuration-link",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Request Types ============

/// A DNS record to publish verbatim, outside of any use case template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDnsRecord {
    /// Record type (`"TXT"`, `"MX"`, `"CNAME"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host label relative to the domain (`"@"` for the apex).
    pub host: String,
    /// Record content.
    pub content: String,
    /// Priority, sent as a string (empty when not applicable).
    pub priority: String,
}

impl RawDnsRecord {
    pub fn new(
        record_type: impl Into<String>,
        host: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            host: host.into(),
            content: content.into(),
            priority: String::new(),
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

/// Payload of the create-dns-configuration-link call.
///
/// # Examples
///
/// ```
/// use cloudvalid_client::{CreateDnsConfigurationLinkRequest, RawDnsRecord};
///
/// let request = CreateDnsConfigurationLinkRequest::new("example.com")
///     .with_use_case("mx")
///     .with_variable("selector", "s1")
///     .with_raw_record(RawDnsRecord::new("TXT", "@", "v=spf1 -all"));
///
/// assert_eq!(request.use_cases, vec!["mx"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDnsConfigurationLinkRequest {
    /// The domain the end user will configure. Required by the API.
    pub domain: String,
    /// Values substituted into the use case templates.
    pub variables: HashMap<String, String>,
    /// Named setup scenarios to apply (e.g. `"mx"`).
    pub use_cases: Vec<String>,
    /// Extra records published as-is.
    pub raw_dns_records: Vec<RawDnsRecord>,
}

impl CreateDnsConfigurationLinkRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_use_case(mut self, use_case: impl Into<String>) -> Self {
        self.use_cases.push(use_case.into());
        self
    }

    #[must_use]
    pub fn with_raw_record(mut self, record: RawDnsRecord) -> Self {
        self.raw_dns_records.push(record);
        self
    }
}

// ============ Shared Response Types ============

/// The DNS provider CloudValid believes hosts the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsProviderGuess {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub url: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub logo: String,
    /// Where the end user should be sent to edit records at that provider.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub target_url: String,
}

/// A record attached to a configuration link, with its propagation flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkRecord {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_case: String,
    #[serde(rename = "type", deserialize_with = "nullable::deserialize")]
    pub record_type: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub host: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub content: String,
    /// Existing records the end user is told to remove.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub remove_existing_records: Vec<String>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub propagated: bool,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub consider_existing_dmarc_valid: bool,
}

// ============ Configuration Link ============

/// A DNS configuration link, as returned by the create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfigurationLink {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub domain: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub variables: HashMap<String, String>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_cases: Vec<String>,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_guess: DnsProviderGuess,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_domain: String,
    #[serde(with = "crate::utils::datetime")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Link to hand to the end user.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url_latest: String,
}

impl DnsConfigurationLink {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

/// Decode target of the create call: `{"result": {...}}`.
///
/// `result` must be present; an explicit `null` decodes as an empty link.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateDnsConfigurationLinkResponse {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub result: DnsConfigurationLink,
}

// ============ Hosted Page ============

/// Branding of the CloudValid customer that created the link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedPageClient {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub brand_primary_color: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub brand_secondary_color: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub brand_logo: String,
}

/// What the end user currently sees on the hosted page of a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedPage {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub service_name: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub redirect_url: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub domain: String,
    #[serde(with = "crate::utils::datetime")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Domain Connect flow URL, popup variant.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub domain_connect_url_new_window: String,
    /// Domain Connect flow URL, redirect variant.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub domain_connect_url_same_window: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_domain: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url_latest: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_cases: Vec<String>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_guess: DnsProviderGuess,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub client: HostedPageClient,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub records: Vec<LinkRecord>,
}

impl HostedPage {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// `true` once every record on the page is reported as propagated.
    pub fn all_propagated(&self) -> bool {
        self.records.iter().all(|r| r.propagated)
    }
}

/// Decode target of the hosted page call: `{"result": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct HostedPageResponse {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub result: HostedPage,
}

// ============ Propagation Status ============

/// The vendor's verdict on one expected record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationRecordStatus {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_case: String,
    #[serde(rename = "type", deserialize_with = "nullable::deserialize")]
    pub record_type: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub host: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub content: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub remove_existing_records: Vec<String>,
    /// Human readable status line.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub message: String,
    /// Human readable hint on how to fix the record.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub suggestion: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub consider_existing_dmarc_valid: bool,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub propagated: bool,
}

impl PropagationRecordStatus {
    /// `true` for every status in `statuses` reporting propagation.
    ///
    /// An empty slice counts as propagated.
    pub fn all_propagated(statuses: &[Self]) -> bool {
        statuses.iter().all(|s| s.propagated)
    }

    /// The statuses still waiting on propagation.
    pub fn pending(statuses: &[Self]) -> impl Iterator<Item = &Self> {
        statuses.iter().filter(|s| !s.propagated)
    }
}

/// Decode target of the propagation status call: `{"result": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct PropagationStatusResponse {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub result: Vec<PropagationRecordStatus>,
}

// ============ Cancellation ============

/// A record inside a use case template.
///
/// Unlike every other shape, the vendor sends the flags on this one in camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateRecord {
    #[serde(rename = "type", deserialize_with = "nullable::deserialize")]
    pub record_type: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub host: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub content: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub priority: String,
    #[serde(rename = "removeExisting", deserialize_with = "nullable::deserialize")]
    pub remove_existing: bool,
    #[serde(
        rename = "considerExistingDmarcValid",
        deserialize_with = "nullable::deserialize"
    )]
    pub consider_existing_dmarc_valid: bool,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub errors: Vec<String>,
}

/// A use case template that was applied to the link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub template_name: String,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_case: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub use_case_display: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub records: Vec<TemplateRecord>,
    /// Names of the variables the template expects.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub variables: Vec<String>,
}

/// Terminal state of a cancelled link, returned flat (no `result` envelope).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelledDnsConfigurationLink {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub user_email: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub domain: String,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub public_url_latest: String,
    #[serde(with = "crate::utils::datetime")]
    pub last_propagation_check_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub last_propagation_check_status: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub propagation_checks_count: i64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub status: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_domain: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dns_provider_guess: DnsProviderGuess,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub records: Vec<LinkRecord>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub templates: Vec<Template>,
}
