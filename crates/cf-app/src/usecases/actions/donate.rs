use std::sync::Arc;

use cf_core::campaign::{parse_amount, plan_donation, DonationPlan};
use cf_core::ports::{CampaignContractPort, WalletPort};
use cf_core::{CampaignAddress, CrowdfundError, ValidationError, WalletAddress};
use tracing::{info, warn};

use super::ActionOutcome;
use crate::usecases::campaigns::{read_status_fields, refetch_balance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationOutcome {
    /// What was sent; `Adjusted` when the amount was clamped to the remaining goal.
    pub plan: DonationPlan,
    pub action: ActionOutcome,
}

pub struct Donate {
    contract: Arc<dyn CampaignContractPort>,
    wallet: Arc<dyn WalletPort>,
}

impl Donate {
    pub fn new(contract: Arc<dyn CampaignContractPort>, wallet: Arc<dyn WalletPort>) -> Self {
        Self { contract, wallet }
    }

    /// Donate `amount` (integer text, smallest unit) to `campaign`.
    #[tracing::instrument(
        name = "usecase.donate.execute",
        skip(self, donor),
        fields(campaign = %campaign)
    )]
    pub async fn execute(
        &self,
        campaign: &CampaignAddress,
        donor: Option<&WalletAddress>,
        amount: &str,
    ) -> Result<DonationOutcome, CrowdfundError> {
        let donor = donor.ok_or(ValidationError::WalletRequired)?;
        let requested = parse_amount(amount)?;

        let readings = read_status_fields(&self.contract, campaign).await;
        let plan = plan_donation(requested, readings.goal, readings.balance);
        let Some(value) = plan.amount() else {
            return Err(ValidationError::GoalReached.into());
        };
        if let DonationPlan::Adjusted { requested, amount } = plan {
            warn!(requested, amount, "donation clamped to the remaining goal");
        }

        let available = self
            .wallet
            .native_balance(donor)
            .await
            .map_err(CrowdfundError::network)?;
        if available < value {
            return Err(ValidationError::InsufficientFunds {
                required: value,
                available,
            }
            .into());
        }

        let receipt = self
            .contract
            .donate(campaign, donor, value)
            .await
            .map_err(CrowdfundError::network)?;
        let balance = refetch_balance(&self.contract, campaign).await;

        info!(value, tx = %receipt.transaction_hash, "donation confirmed");
        Ok(DonationOutcome {
            plan,
            action: ActionOutcome { receipt, balance },
        })
    }
}
