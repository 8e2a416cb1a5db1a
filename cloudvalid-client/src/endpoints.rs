//! URL templates for the four CloudValid calls.

use serde::{Deserialize, Serialize};

use crate::types::Operation;

/// Production base URL of the CloudValid API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudvalid.com/api/v1";

/// Token replaced with the link id in templated endpoints.
pub const ID_PLACEHOLDER: &str = "{id}";

const CREATE_PATH: &str = "/dns-config/create-dns-configuration-link";
const HOSTED_PAGE_PATH: &str = "/dns-config/get-hosted-page/{id}";
const PROPAGATION_STATUS_PATH: &str = "/dns-config/get-propagation-status/{id}";
// The vendor cancels through the status path with POST.
const CANCEL_PATH: &str = PROPAGATION_STATUS_PATH;

/// Full URL templates, one per [`Operation`].
///
/// Templates may contain [`ID_PLACEHOLDER`]; every occurrence is replaced
/// verbatim with the caller's link id. Each template can be overridden on its
/// own, for example if the vendor ever moves cancellation to a dedicated path:
///
/// ```
/// use cloudvalid_client::Endpoints;
///
/// let mut endpoints = Endpoints::default();
/// endpoints.cancel_dns_configuration_link =
///     "https://api.cloudvalid.com/api/v1/dns-config/cancel/{id}".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub create_dns_configuration_link: String,
    pub get_hosted_page: String,
    pub get_propagation_status: String,
    pub cancel_dns_configuration_link: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Build the vendor's path layout on top of another base URL
    /// (a staging host, or a mock server in tests).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            create_dns_configuration_link: format!("{base}{CREATE_PATH}"),
            get_hosted_page: format!("{base}{HOSTED_PAGE_PATH}"),
            get_propagation_status: format!("{base}{PROPAGATION_STATUS_PATH}"),
            cancel_dns_configuration_link: format!("{base}{CANCEL_PATH}"),
        }
    }

    /// The template used by `operation`.
    pub fn template(&self, operation: Operation) -> &str {
        match operation {
            Operation::CreateDnsConfigurationLink => &self.create_dns_configuration_link,
            Operation::GetHostedPage => &self.get_hosted_page,
            Operation::GetPropagationStatus => &self.get_propagation_status,
            Operation::CancelDnsConfigurationLink => &self.cancel_dns_configuration_link,
        }
    }
}

/// Replace every [`ID_PLACEHOLDER`] in `template` with `id`, without escaping.
pub fn expand_id(template: &str, id: &str) -> String {
    template.replace(ID_PLACEHOLDER, id)
}
