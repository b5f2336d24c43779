//! One ledger per chain, selected by the active read context.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use cf_core::campaign::CampaignSummary;
use cf_core::ports::{
    CampaignContractPort, CampaignFactoryPort, ClockPort, CreateCampaignParams, DeploymentReceipt,
    TxReceipt, WalletPort,
};
use cf_core::{CampaignAddress, Chain, ReadContextTracker, WalletAddress};

use super::ledger::InMemoryCampaignLedger;

/// Serves the contract, factory and wallet ports from the ledger of the
/// chain currently selected in the [`ReadContextTracker`].
///
/// Campaigns and wallet balances never cross chains: each ledger stands in
/// for the factory at [`Chain::factory_address`].
pub struct ChainScopedLedgers {
    ledgers: HashMap<Chain, Arc<InMemoryCampaignLedger>>,
    read_context: Arc<ReadContextTracker>,
}

impl ChainScopedLedgers {
    pub fn new(clock: Arc<dyn ClockPort>, read_context: Arc<ReadContextTracker>) -> Self {
        let ledgers = Chain::ALL
            .into_iter()
            .map(|chain| {
                let ledger = InMemoryCampaignLedger::new(clock.clone())
                    .at_factory(chain.factory_address());
                (chain, Arc::new(ledger))
            })
            .collect();
        Self {
            ledgers,
            read_context,
        }
    }

    /// Ledger of one chain, for seeding balances or campaigns.
    pub fn ledger(&self, chain: Chain) -> Option<Arc<InMemoryCampaignLedger>> {
        self.ledgers.get(&chain).cloned()
    }

    fn active(&self) -> Result<&InMemoryCampaignLedger> {
        let chain = self.read_context.current().chain;
        self.ledgers
            .get(&chain)
            .map(|ledger| &**ledger)
            .ok_or_else(|| anyhow!("no factory deployed on {chain}"))
    }
}

#[async_trait]
impl CampaignContractPort for ChainScopedLedgers {
    async fn name(&self, campaign: &CampaignAddress) -> Result<String> {
        self.active()?.name(campaign).await
    }

    async fn description(&self, campaign: &CampaignAddress) -> Result<String> {
        self.active()?.description(campaign).await
    }

    async fn goal(&self, campaign: &CampaignAddress) -> Result<u128> {
        self.active()?.goal(campaign).await
    }

    async fn balance(&self, campaign: &CampaignAddress) -> Result<u128> {
        self.active()?.balance(campaign).await
    }

    async fn deadline(&self, campaign: &CampaignAddress) -> Result<u64> {
        self.active()?.deadline(campaign).await
    }

    async fn owner(&self, campaign: &CampaignAddress) -> Result<WalletAddress> {
        self.active()?.owner(campaign).await
    }

    async fn state(&self, campaign: &CampaignAddress) -> Result<u8> {
        self.active()?.state(campaign).await
    }

    async fn donate(
        &self,
        campaign: &CampaignAddress,
        from: &WalletAddress,
        value: u128,
    ) -> Result<TxReceipt> {
        self.active()?.donate(campaign, from, value).await
    }

    async fn withdraw(&self, campaign: &CampaignAddress, from: &WalletAddress) -> Result<TxReceipt> {
        self.active()?.withdraw(campaign, from).await
    }

    async fn refund(&self, campaign: &CampaignAddress, from: &WalletAddress) -> Result<TxReceipt> {
        self.active()?.refund(campaign, from).await
    }
}

#[async_trait]
impl CampaignFactoryPort for ChainScopedLedgers {
    async fn get_all_campaigns(&self) -> Result<Vec<CampaignSummary>> {
        self.active()?.get_all_campaigns().await
    }

    async fn get_user_campaigns(&self, user: &WalletAddress) -> Result<Vec<CampaignSummary>> {
        self.active()?.get_user_campaigns(user).await
    }

    async fn create_campaign(
        &self,
        from: &WalletAddress,
        params: CreateCampaignParams,
    ) -> Result<DeploymentReceipt> {
        self.active()?.create_campaign(from, params).await
    }
}

#[async_trait]
impl WalletPort for ChainScopedLedgers {
    async fn native_balance(&self, address: &WalletAddress) -> Result<u128> {
        self.active()?.native_balance(address).await
    }
}
