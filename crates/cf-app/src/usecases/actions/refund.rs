use std::sync::Arc;

use cf_core::ports::CampaignContractPort;
use cf_core::{CampaignAddress, CrowdfundError, ValidationError, WalletAddress};
use tracing::info;

use super::ActionOutcome;
use crate::usecases::campaigns::refetch_balance;

/// Donor refund; eligibility is enforced by the contract.
pub struct Refund {
    contract: Arc<dyn CampaignContractPort>,
}

impl Refund {
    pub fn new(contract: Arc<dyn CampaignContractPort>) -> Self {
        Self { contract }
    }

    #[tracing::instrument(
        name = "usecase.refund.execute",
        skip(self, donor),
        fields(campaign = %campaign)
    )]
    pub async fn execute(
        &self,
        campaign: &CampaignAddress,
        donor: Option<&WalletAddress>,
    ) -> Result<ActionOutcome, CrowdfundError> {
        let donor = donor.ok_or(ValidationError::WalletRequired)?;

        let receipt = self
            .contract
            .refund(campaign, donor)
            .await
            .map_err(CrowdfundError::network)?;
        let balance = refetch_balance(&self.contract, campaign).await;

        info!(tx = %receipt.transaction_hash, "refund confirmed");
        Ok(ActionOutcome { receipt, balance })
    }
}
