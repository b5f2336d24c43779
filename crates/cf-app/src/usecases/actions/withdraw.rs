use std::sync::Arc;

use cf_core::campaign::can_withdraw;
use cf_core::ports::{CampaignContractPort, ClockPort, WalletPort};
use cf_core::{CampaignAddress, CrowdfundError, ValidationError, WalletAddress};
use tracing::info;

use super::ActionOutcome;
use crate::usecases::campaigns::{read_status_fields, refetch_balance};

/// Owner payout of a successful campaign.
pub struct Withdraw {
    contract: Arc<dyn CampaignContractPort>,
    wallet: Arc<dyn WalletPort>,
    clock: Arc<dyn ClockPort>,
}

impl Withdraw {
    pub fn new(
        contract: Arc<dyn CampaignContractPort>,
        wallet: Arc<dyn WalletPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            contract,
            wallet,
            clock,
        }
    }

    #[tracing::instrument(
        name = "usecase.withdraw.execute",
        skip(self, viewer),
        fields(campaign = %campaign)
    )]
    pub async fn execute(
        &self,
        campaign: &CampaignAddress,
        viewer: Option<&WalletAddress>,
    ) -> Result<ActionOutcome, CrowdfundError> {
        let viewer = viewer.ok_or(ValidationError::WalletRequired)?;

        let (readings, owner) = futures::join!(
            read_status_fields(&self.contract, campaign),
            self.contract.owner(campaign),
        );
        let owner = owner.map_err(CrowdfundError::network)?;
        let status = readings.status(self.clock.now_secs());
        let balance = readings.balance.unwrap_or(0);
        if !can_withdraw(Some(viewer), &owner, status, balance) {
            return Err(ValidationError::WithdrawNotAllowed.into());
        }

        // The payout transaction needs fees.
        let available = self
            .wallet
            .native_balance(viewer)
            .await
            .map_err(CrowdfundError::network)?;
        if available == 0 {
            return Err(ValidationError::InsufficientFunds {
                required: 1,
                available,
            }
            .into());
        }

        let receipt = self
            .contract
            .withdraw(campaign, viewer)
            .await
            .map_err(CrowdfundError::network)?;
        let balance = refetch_balance(&self.contract, campaign).await;

        info!(tx = %receipt.transaction_hash, "withdrawal confirmed");
        Ok(ActionOutcome { receipt, balance })
    }
}
