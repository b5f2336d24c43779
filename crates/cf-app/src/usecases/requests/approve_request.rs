use std::sync::Arc;

use cf_core::ports::{CampaignFactoryPort, ClockPort, CreateCampaignParams, RequestStorePort};
use cf_core::request::{
    resolve_linkage, CreationWindow, RequestLifecycle, RequestResolution, DEFAULT_DURATION_DAYS,
};
use cf_core::{
    AdminRegistry, CampaignRequest, CrowdfundError, InconsistencyError, RequestId, WalletAddress,
};
use tracing::{info, warn};

/// Result of an approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    pub request: CampaignRequest,
    pub transaction_hash: String,
    /// Set when the deployed campaign could not be linked; the request is
    /// then stored with an empty address.
    pub warning: Option<InconsistencyError>,
}

/// Use case for approving a campaign request.
///
/// Deploys the campaign through the factory, waits for confirmation,
/// refetches the campaign list once to locate the new contract and records
/// the linkage. A failed deployment leaves the request pending.
pub struct ApproveCampaignRequest {
    factory: Arc<dyn CampaignFactoryPort>,
    request_store: Arc<dyn RequestStorePort>,
    clock: Arc<dyn ClockPort>,
    admins: Arc<AdminRegistry>,
    creation_window_secs: u64,
}

impl ApproveCampaignRequest {
    pub fn new(
        factory: Arc<dyn CampaignFactoryPort>,
        request_store: Arc<dyn RequestStorePort>,
        clock: Arc<dyn ClockPort>,
        admins: Arc<AdminRegistry>,
        creation_window_secs: u64,
    ) -> Self {
        Self {
            factory,
            request_store,
            clock,
            admins,
            creation_window_secs,
        }
    }

    #[tracing::instrument(
        name = "usecase.approve_campaign_request.execute",
        skip(self),
        fields(admin = %admin, request_id = %id)
    )]
    pub async fn execute(
        &self,
        admin: &WalletAddress,
        id: &RequestId,
    ) -> Result<ApprovalOutcome, CrowdfundError> {
        self.admins.ensure_admin(admin)?;

        let request = self
            .request_store
            .get(id)
            .await?
            .ok_or_else(|| CrowdfundError::RequestNotFound(id.clone()))?;
        RequestLifecycle::ensure_pending(&request)?;

        let params = CreateCampaignParams {
            owner: request.creator.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            goal: request.goal,
            duration_days: if request.deadline_days == 0 {
                DEFAULT_DURATION_DAYS
            } else {
                request.deadline_days
            },
        };
        let receipt = self
            .factory
            .create_campaign(admin, params)
            .await
            .map_err(CrowdfundError::network)?;
        info!(tx = %receipt.transaction_hash, "campaign deployment confirmed");

        // Single refetch after confirmation.
        let candidates = match self.factory.get_all_campaigns().await {
            Ok(campaigns) => campaigns,
            Err(err) => {
                warn!(error = %err, "campaign list refetch after deployment failed");
                Vec::new()
            }
        };

        let now_ms = self.clock.now_ms();
        let window = CreationWindow::around(&request, self.clock.now_secs(), self.creation_window_secs);
        let linkage = resolve_linkage(
            receipt.campaign_address.as_ref(),
            &candidates,
            &request,
            window,
        );

        let resolution = RequestResolution::approve(linkage.address(), now_ms);
        let approved = self.request_store.update_if_pending(id, resolution).await?;

        info!(
            request_id = %approved.id,
            campaign = %linkage.address(),
            linked = linkage.warning().is_none(),
            "Campaign request approved"
        );
        Ok(ApprovalOutcome {
            request: approved,
            transaction_hash: receipt.transaction_hash,
            warning: linkage.warning().cloned(),
        })
    }
}
