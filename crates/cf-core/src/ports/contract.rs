use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::{CampaignAddress, WalletAddress};

/// Confirmation of a state-changing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub transaction_hash: String,
}

/// Per-campaign contract calls.
///
/// Mutating calls resolve once the transaction is confirmed; a dismissed
/// wallet prompt surfaces as an error mentioning "rejected".
#[async_trait]
pub trait CampaignContractPort: Send + Sync {
    async fn name(&self, campaign: &CampaignAddress) -> Result<String>;
    async fn description(&self, campaign: &CampaignAddress) -> Result<String>;
    async fn goal(&self, campaign: &CampaignAddress) -> Result<u128>;
    /// `getContractBalance()`.
    async fn balance(&self, campaign: &CampaignAddress) -> Result<u128>;
    /// Unix seconds.
    async fn deadline(&self, campaign: &CampaignAddress) -> Result<u64>;
    async fn owner(&self, campaign: &CampaignAddress) -> Result<WalletAddress>;
    /// Raw `state()` code: 0 active, 1 successful, 2 failed.
    async fn state(&self, campaign: &CampaignAddress) -> Result<u8>;

    async fn donate(
        &self,
        campaign: &CampaignAddress,
        from: &WalletAddress,
        value: u128,
    ) -> Result<TxReceipt>;
    async fn withdraw(&self, campaign: &CampaignAddress, from: &WalletAddress)
        -> Result<TxReceipt>;
    async fn refund(&self, campaign: &CampaignAddress, from: &WalletAddress) -> Result<TxReceipt>;
}
