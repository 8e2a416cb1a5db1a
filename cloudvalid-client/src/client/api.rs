//! CloudValid `DnsConfigurationApi` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsConfigurationApi;
use crate::types::{
    CancelledDnsConfigurationLink, CreateDnsConfigurationLinkRequest,
    CreateDnsConfigurationLinkResponse, DnsConfigurationLink, HostedPage, HostedPageResponse,
    Operation, PropagationRecordStatus, PropagationStatusResponse,
};

use super::CloudValidClient;

#[async_trait]
impl DnsConfigurationApi for CloudValidClient {
    async fn create_dns_configuration_link(
        &self,
        request: &CreateDnsConfigurationLinkRequest,
    ) -> Result<DnsConfigurationLink> {
        let response: CreateDnsConfigurationLinkResponse = self
            .post(Operation::CreateDnsConfigurationLink, None, Some(request))
            .await?;

        log::info!(
            "[{}] created link {} for {}",
            Operation::CreateDnsConfigurationLink,
            response.result.id,
            response.result.domain
        );
        Ok(response.result)
    }

    async fn get_hosted_page(&self, id: &str) -> Result<HostedPage> {
        let response: HostedPageResponse = self.get(Operation::GetHostedPage, Some(id)).await?;
        Ok(response.result)
    }

    async fn get_propagation_status(&self, id: &str) -> Result<Vec<PropagationRecordStatus>> {
        let response: PropagationStatusResponse =
            self.get(Operation::GetPropagationStatus, Some(id)).await?;

        log::debug!(
            "[{}] {}: {}/{} records propagated",
            Operation::GetPropagationStatus,
            id,
            response.result.iter().filter(|s| s.propagated).count(),
            response.result.len()
        );
        Ok(response.result)
    }

    async fn cancel_dns_configuration_link(
        &self,
        id: &str,
    ) -> Result<CancelledDnsConfigurationLink> {
        // Flat object, no `result` envelope.
        let cancelled: CancelledDnsConfigurationLink = self
            .post::<_, ()>(Operation::CancelDnsConfigurationLink, Some(id), None)
            .await?;

        log::info!(
            "[{}] cancelled link {id}",
            Operation::CancelDnsConfigurationLink
        );
        Ok(cancelled)
    }
}
