use std::sync::Arc;

use cf_core::listing::{ListedCampaign, StatusFilter};
use cf_core::ports::{CampaignContractPort, CampaignFactoryPort, ClockPort, RequestStorePort};
use cf_core::request::sort_newest_first;
use cf_core::{CampaignRequest, CrowdfundError, WalletAddress};
use futures::future::join_all;
use tracing::{info, warn};

use super::reads::read_status_fields;

/// A creator's deployed campaigns and every request they submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorDashboard {
    pub campaigns: Vec<ListedCampaign>,
    /// Newest first, any status.
    pub requests: Vec<CampaignRequest>,
    /// Approved requests with no linked campaign address.
    pub unlinked_requests: usize,
}

pub struct GetCreatorDashboard {
    factory: Arc<dyn CampaignFactoryPort>,
    contract: Arc<dyn CampaignContractPort>,
    request_store: Arc<dyn RequestStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl GetCreatorDashboard {
    pub fn new(
        factory: Arc<dyn CampaignFactoryPort>,
        contract: Arc<dyn CampaignContractPort>,
        request_store: Arc<dyn RequestStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            factory,
            contract,
            request_store,
            clock,
        }
    }

    /// With `StatusFilter::All` campaigns whose status is still loading are
    /// kept; any other filter only keeps resolved matches.
    #[tracing::instrument(
        name = "usecase.get_creator_dashboard.execute",
        skip(self),
        fields(creator = %creator, filter = %filter)
    )]
    pub async fn execute(
        &self,
        creator: &WalletAddress,
        filter: StatusFilter,
    ) -> Result<CreatorDashboard, CrowdfundError> {
        let summaries = self
            .factory
            .get_user_campaigns(creator)
            .await
            .map_err(CrowdfundError::network)?;

        let readings = join_all(
            summaries
                .iter()
                .map(|s| read_status_fields(&self.contract, &s.campaign_address)),
        )
        .await;

        let now = self.clock.now_secs();
        let campaigns: Vec<ListedCampaign> = summaries
            .into_iter()
            .zip(readings)
            .map(|(summary, readings)| ListedCampaign {
                summary,
                status: readings.status(now),
            })
            .filter(|c| match c.status.resolved() {
                Some(status) => filter.accepts(status),
                None => filter == StatusFilter::All,
            })
            .collect();

        let mut requests = self.request_store.list_by_creator(creator).await?;
        sort_newest_first(&mut requests);

        let unlinked_requests = requests
            .iter()
            .filter(|r| r.needs_reconciliation())
            .count();
        if unlinked_requests > 0 {
            warn!(
                unlinked_requests,
                "approved requests without a linked campaign"
            );
        }

        info!(
            campaigns = campaigns.len(),
            requests = requests.len(),
            "creator dashboard resolved"
        );
        Ok(CreatorDashboard {
            campaigns,
            requests,
            unlinked_requests,
        })
    }
}
