use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignSummary;
use crate::ids::{CampaignAddress, WalletAddress};

/// Arguments of `createCampaign(owner, name, description, goal, durationInDays)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignParams {
    pub owner: WalletAddress,
    pub name: String,
    pub description: String,
    pub goal: u128,
    pub duration_days: u32,
}

/// Confirmation of a factory deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReceipt {
    pub transaction_hash: String,
    /// Present when the adapter could decode the address from receipt data.
    pub campaign_address: Option<CampaignAddress>,
}

#[async_trait]
pub trait CampaignFactoryPort: Send + Sync {
    async fn get_all_campaigns(&self) -> Result<Vec<CampaignSummary>>;
    async fn get_user_campaigns(&self, user: &WalletAddress) -> Result<Vec<CampaignSummary>>;
    /// Resolves once the deployment is confirmed.
    async fn create_campaign(
        &self,
        from: &WalletAddress,
        params: CreateCampaignParams,
    ) -> Result<DeploymentReceipt>;
}
