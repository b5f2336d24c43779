use std::sync::Arc;

use cf_core::ports::RequestStorePort;
use cf_core::request::RequestResolution;
use cf_core::{AdminRegistry, CampaignRequest, CrowdfundError, RequestId, WalletAddress};
use tracing::info;

pub struct RejectCampaignRequest {
    request_store: Arc<dyn RequestStorePort>,
    admins: Arc<AdminRegistry>,
}

impl RejectCampaignRequest {
    pub fn new(request_store: Arc<dyn RequestStorePort>, admins: Arc<AdminRegistry>) -> Self {
        Self {
            request_store,
            admins,
        }
    }

    /// Reject a pending request. The reason must not be blank; the store
    /// refuses the update when another reviewer resolved the request first.
    #[tracing::instrument(
        name = "usecase.reject_campaign_request.execute",
        skip(self, reason),
        fields(admin = %admin, request_id = %id)
    )]
    pub async fn execute(
        &self,
        admin: &WalletAddress,
        id: &RequestId,
        reason: &str,
    ) -> Result<CampaignRequest, CrowdfundError> {
        self.admins.ensure_admin(admin)?;
        let resolution = RequestResolution::reject(reason)?;

        let rejected = self.request_store.update_if_pending(id, resolution).await?;

        info!(request_id = %rejected.id, "Campaign request rejected");
        Ok(rejected)
    }
}
