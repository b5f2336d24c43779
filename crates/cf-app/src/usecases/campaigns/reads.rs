//! Independent per-field reads of one campaign contract.

use std::sync::Arc;

use cf_core::campaign::CampaignReadings;
use cf_core::ports::CampaignContractPort;
use cf_core::CampaignAddress;
use tracing::debug;

/// Issue the four status-relevant reads concurrently. A failed read leaves
/// its field unresolved so the derived status degrades to `Loading`.
pub(crate) async fn read_status_fields(
    contract: &Arc<dyn CampaignContractPort>,
    campaign: &CampaignAddress,
) -> CampaignReadings {
    let (raw_state, deadline, balance, goal) = futures::join!(
        contract.state(campaign),
        contract.deadline(campaign),
        contract.balance(campaign),
        contract.goal(campaign),
    );

    CampaignReadings {
        raw_state: settle(campaign, "state", raw_state),
        deadline: settle(campaign, "deadline", deadline),
        balance: settle(campaign, "balance", balance),
        goal: settle(campaign, "goal", goal),
    }
}

/// Single balance read after a confirmed mutation.
pub(crate) async fn refetch_balance(
    contract: &Arc<dyn CampaignContractPort>,
    campaign: &CampaignAddress,
) -> Option<u128> {
    settle(campaign, "balance", contract.balance(campaign).await)
}

pub(crate) fn settle<T>(campaign: &CampaignAddress, field: &str, read: anyhow::Result<T>) -> Option<T> {
    match read {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(campaign = %campaign, field, error = %err, "contract read failed");
            None
        }
    }
}
