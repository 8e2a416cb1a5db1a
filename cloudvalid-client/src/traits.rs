use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    CancelledDnsConfigurationLink, CreateDnsConfigurationLinkRequest, DnsConfigurationLink,
    HostedPage, PropagationRecordStatus,
};

/// The CloudValid DNS configuration API.
///
/// Implemented by [`CloudValidClient`](crate::CloudValidClient). Code that only
/// needs the four calls can depend on `Arc<dyn DnsConfigurationApi>` and swap
/// in a fake for its own tests.
///
/// Every call is a single request/response exchange. Nothing is retried and
/// nothing is polled; to wait for propagation, call
/// [`get_propagation_status`](Self::get_propagation_status) again.
#[async_trait]
pub trait DnsConfigurationApi: Send + Sync {
    /// Create a DNS configuration link for a domain.
    async fn create_dns_configuration_link(
        &self,
        request: &CreateDnsConfigurationLinkRequest,
    ) -> Result<DnsConfigurationLink>;

    /// Fetch the hosted page state of a link.
    async fn get_hosted_page(&self, id: &str) -> Result<HostedPage>;

    /// Fetch the vendor's per-record propagation verdicts for a link.
    async fn get_propagation_status(&self, id: &str) -> Result<Vec<PropagationRecordStatus>>;

    /// Cancel a link that has not finished propagating.
    async fn cancel_dns_configuration_link(
        &self,
        id: &str,
    ) -> Result<CancelledDnsConfigurationLink>;
}
