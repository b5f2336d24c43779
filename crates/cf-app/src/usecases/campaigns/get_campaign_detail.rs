use std::sync::Arc;

use cf_core::campaign::{can_withdraw, days_left, funding_percentage, funds_withdrawn, is_flagged};
use cf_core::ports::{CampaignContractPort, ClockPort, RequestStorePort};
use cf_core::{CampaignAddress, ReadContextTracker, StatusView, WalletAddress};
use serde::Serialize;
use tracing::{info, warn};

use super::reads::{read_status_fields, settle};

/// Off-chain details stored with the request that produced the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignMetadata {
    pub cover_image_url: String,
    pub creator_full_name: String,
    /// Milliseconds since epoch.
    pub created_at: i64,
}

/// Everything the detail view shows for one campaign.
///
/// Reads that failed are `None`; the status then stays `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignDetail {
    pub address: CampaignAddress,
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<WalletAddress>,
    pub goal: Option<u128>,
    pub balance: Option<u128>,
    pub deadline: Option<u64>,
    pub status: StatusView,
    pub funding_percentage: Option<u8>,
    pub days_left: Option<i64>,
    pub is_flagged: bool,
    pub can_withdraw: bool,
    pub funds_withdrawn: bool,
    pub metadata: Option<CampaignMetadata>,
    /// Block explorer page of the campaign on the active chain.
    pub explorer_url: String,
}

pub struct GetCampaignDetail {
    contract: Arc<dyn CampaignContractPort>,
    request_store: Arc<dyn RequestStorePort>,
    read_context: Arc<ReadContextTracker>,
    clock: Arc<dyn ClockPort>,
}

impl GetCampaignDetail {
    pub fn new(
        contract: Arc<dyn CampaignContractPort>,
        request_store: Arc<dyn RequestStorePort>,
        read_context: Arc<ReadContextTracker>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            contract,
            request_store,
            read_context,
            clock,
        }
    }

    /// Read one campaign. Never fails: unreadable fields stay unresolved.
    #[tracing::instrument(
        name = "usecase.get_campaign_detail.execute",
        skip(self, viewer),
        fields(campaign = %campaign)
    )]
    pub async fn execute(
        &self,
        campaign: &CampaignAddress,
        viewer: Option<&WalletAddress>,
    ) -> CampaignDetail {
        let (readings, name, description, owner) = futures::join!(
            read_status_fields(&self.contract, campaign),
            self.contract.name(campaign),
            self.contract.description(campaign),
            self.contract.owner(campaign),
        );
        let name = settle(campaign, "name", name);
        let description = settle(campaign, "description", description);
        let owner = settle(campaign, "owner", owner);

        let now = self.clock.now_secs();
        let status = readings.status(now);

        let metadata = match &name {
            Some(name) => self.lookup_metadata(name).await,
            None => None,
        };

        let percentage = match (readings.balance, readings.goal) {
            (Some(balance), Some(goal)) => Some(funding_percentage(balance, goal)),
            _ => None,
        };
        let withdrawable = match (&owner, readings.balance) {
            (Some(owner), Some(balance)) => can_withdraw(viewer, owner, status, balance),
            _ => false,
        };

        let detail = CampaignDetail {
            address: campaign.clone(),
            is_flagged: name.as_deref().is_some_and(is_flagged),
            name,
            description,
            owner,
            goal: readings.goal,
            balance: readings.balance,
            deadline: readings.deadline,
            status,
            funding_percentage: percentage,
            days_left: readings.deadline.map(|deadline| days_left(deadline, now)),
            can_withdraw: withdrawable,
            funds_withdrawn: readings
                .balance
                .is_some_and(|balance| funds_withdrawn(status, balance)),
            metadata,
            explorer_url: self
                .read_context
                .current()
                .chain
                .explorer_address_url(campaign.as_str()),
        };
        info!(status = %detail.status, "campaign detail resolved");
        detail
    }

    async fn lookup_metadata(&self, name: &str) -> Option<CampaignMetadata> {
        match self.request_store.find_by_name(name).await {
            Ok(found) => found.map(|request| CampaignMetadata {
                cover_image_url: request.cover_image_url,
                creator_full_name: request.full_name,
                created_at: request.created_at,
            }),
            Err(err) => {
                warn!(error = %err, "campaign metadata lookup failed");
                None
            }
        }
    }
}
