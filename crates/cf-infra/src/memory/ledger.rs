//! In-memory model of the factory and campaign contracts.
//!
//! Mirrors the on-chain rules: the stored state only advances when a
//! mutating call runs, so reads can lag behind the deadline or a reached
//! goal exactly like the deployed contracts do.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::debug;

use cf_core::campaign::{CampaignSummary, RawCampaignState};
use cf_core::ports::{
    CampaignContractPort, CampaignFactoryPort, ClockPort, CreateCampaignParams, DeploymentReceipt,
    TxReceipt, WalletPort,
};
use cf_core::{CampaignAddress, WalletAddress};

const SECONDS_PER_DAY: u64 = 86_400;

struct LedgerCampaign {
    address: CampaignAddress,
    owner: WalletAddress,
    name: String,
    description: String,
    goal: u128,
    balance: u128,
    deadline: u64,
    state: RawCampaignState,
    creation_time: u64,
    /// Keyed by lower-cased donor address.
    contributions: HashMap<String, u128>,
}

impl LedgerCampaign {
    /// `checkAndUpdateCampaignState()`.
    fn settle_state(&mut self, now: u64) {
        if self.state != RawCampaignState::Active {
            return;
        }
        if now >= self.deadline {
            self.state = if self.balance >= self.goal {
                RawCampaignState::Successful
            } else {
                RawCampaignState::Failed
            };
        } else if self.balance >= self.goal {
            self.state = RawCampaignState::Successful;
        }
    }

    fn summary(&self, with_creation_time: bool) -> CampaignSummary {
        CampaignSummary {
            campaign_address: self.address.clone(),
            owner: self.owner.clone(),
            name: self.name.clone(),
            creation_time: with_creation_time.then_some(self.creation_time),
        }
    }
}

#[derive(Default)]
struct LedgerState {
    /// Deployment order.
    campaigns: Vec<LedgerCampaign>,
    /// Keyed by lower-cased address.
    wallets: HashMap<String, u128>,
    unreadable: Vec<CampaignAddress>,
    reject_next: bool,
}

impl LedgerState {
    fn campaign(&self, address: &CampaignAddress) -> Result<&LedgerCampaign> {
        if self.unreadable.contains(address) {
            bail!("execution reverted: call to {address} timed out");
        }
        match self.campaigns.iter().find(|c| &c.address == address) {
            Some(campaign) => Ok(campaign),
            None => bail!("no contract deployed at {address}"),
        }
    }

    fn campaign_mut(&mut self, address: &CampaignAddress) -> Result<&mut LedgerCampaign> {
        match self.campaigns.iter_mut().find(|c| &c.address == address) {
            Some(campaign) => Ok(campaign),
            None => bail!("no contract deployed at {address}"),
        }
    }

    fn take_rejection(&mut self) -> Result<()> {
        if std::mem::take(&mut self.reject_next) {
            bail!("User rejected the request.");
        }
        Ok(())
    }

    fn wallet_mut(&mut self, address: &WalletAddress) -> &mut u128 {
        self.wallets
            .entry(address.as_str().to_ascii_lowercase())
            .or_insert(0)
    }
}

/// Factory, campaign contracts and wallet balances in one process-local
/// ledger. Amounts are in the smallest unit; gas is not modelled.
pub struct InMemoryCampaignLedger {
    state: Mutex<LedgerState>,
    clock: Arc<dyn ClockPort>,
    factory: String,
    report_deployed_address: bool,
}

impl InMemoryCampaignLedger {
    /// Deployment receipts carry no campaign address, so callers have to
    /// locate new campaigns through the factory list.
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            clock,
            factory: String::new(),
            report_deployed_address: false,
        }
    }

    /// Label the ledger with the factory contract it stands in for.
    pub fn at_factory(mut self, factory: impl Into<String>) -> Self {
        self.factory = factory.into();
        self
    }

    pub fn factory(&self) -> &str {
        &self.factory
    }

    /// Include the new campaign address in deployment receipts.
    pub fn reporting_deployed_addresses(mut self) -> Self {
        self.report_deployed_address = true;
        self
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> u64 {
        self.clock.now_secs()
    }

    pub fn fund_wallet(&self, address: &WalletAddress, amount: u128) {
        let mut state = self.lock();
        let balance = state.wallet_mut(address);
        *balance = balance.saturating_add(amount);
    }

    /// Deploy a campaign directly, bypassing the wallet flow.
    pub fn deploy(&self, params: CreateCampaignParams) -> CampaignAddress {
        let now = self.now();
        let address = CampaignAddress::from(format!("0x{}", hex::encode(rand::random::<[u8; 20]>())));
        let campaign = LedgerCampaign {
            address: address.clone(),
            owner: params.owner,
            name: params.name,
            description: params.description,
            goal: params.goal,
            balance: 0,
            deadline: now.saturating_add(u64::from(params.duration_days) * SECONDS_PER_DAY),
            state: RawCampaignState::Active,
            creation_time: now,
            contributions: HashMap::new(),
        };
        self.lock().campaigns.push(campaign);
        debug!(campaign = %address, factory = %self.factory, "campaign deployed");
        address
    }

    /// Make every read of `address` fail until cleared.
    pub fn set_unreadable(&self, address: &CampaignAddress, unreadable: bool) {
        let mut state = self.lock();
        state.unreadable.retain(|a| a != address);
        if unreadable {
            state.unreadable.push(address.clone());
        }
    }

    /// The next mutating call fails as if the user dismissed the wallet prompt.
    pub fn reject_next_transaction(&self) {
        self.lock().reject_next = true;
    }

    fn read<T>(&self, address: &CampaignAddress, f: impl FnOnce(&LedgerCampaign) -> T) -> Result<T> {
        let state = self.lock();
        state.campaign(address).map(f)
    }
}

fn tx_receipt() -> TxReceipt {
    TxReceipt {
        transaction_hash: format!("0x{}", hex::encode(rand::random::<[u8; 32]>())),
    }
}

#[async_trait]
impl CampaignContractPort for InMemoryCampaignLedger {
    async fn name(&self, campaign: &CampaignAddress) -> Result<String> {
        self.read(campaign, |c| c.name.clone())
    }

    async fn description(&self, campaign: &CampaignAddress) -> Result<String> {
        self.read(campaign, |c| c.description.clone())
    }

    async fn goal(&self, campaign: &CampaignAddress) -> Result<u128> {
        self.read(campaign, |c| c.goal)
    }

    async fn balance(&self, campaign: &CampaignAddress) -> Result<u128> {
        self.read(campaign, |c| c.balance)
    }

    async fn deadline(&self, campaign: &CampaignAddress) -> Result<u64> {
        self.read(campaign, |c| c.deadline)
    }

    async fn owner(&self, campaign: &CampaignAddress) -> Result<WalletAddress> {
        self.read(campaign, |c| c.owner.clone())
    }

    async fn state(&self, campaign: &CampaignAddress) -> Result<u8> {
        self.read(campaign, |c| c.state.code())
    }

    async fn donate(
        &self,
        campaign: &CampaignAddress,
        from: &WalletAddress,
        value: u128,
    ) -> Result<TxReceipt> {
        let now = self.now();
        let mut state = self.lock();
        state.take_rejection()?;
        if value == 0 {
            bail!("execution reverted: amount must be greater than 0");
        }

        let target = state.campaign_mut(campaign)?;
        target.settle_state(now);
        if target.state != RawCampaignState::Active {
            bail!("execution reverted: Campaign is not active.");
        }

        let wallet = state.wallet_mut(from);
        if *wallet < value {
            bail!("insufficient funds for transfer");
        }
        *wallet -= value;

        let target = state.campaign_mut(campaign)?;
        target.balance = target.balance.saturating_add(value);
        *target
            .contributions
            .entry(from.as_str().to_ascii_lowercase())
            .or_insert(0) += value;
        target.settle_state(now);
        Ok(tx_receipt())
    }

    async fn withdraw(&self, campaign: &CampaignAddress, from: &WalletAddress) -> Result<TxReceipt> {
        let now = self.now();
        let mut state = self.lock();
        state.take_rejection()?;

        let target = state.campaign_mut(campaign)?;
        if !target.owner.matches(from) {
            bail!("execution reverted: Not the owner");
        }
        target.settle_state(now);
        if target.state != RawCampaignState::Successful {
            bail!("execution reverted: Campaign not successful.");
        }
        let payout = std::mem::take(&mut target.balance);
        let owner = target.owner.clone();
        *state.wallet_mut(&owner) += payout;
        Ok(tx_receipt())
    }

    async fn refund(&self, campaign: &CampaignAddress, from: &WalletAddress) -> Result<TxReceipt> {
        let now = self.now();
        let mut state = self.lock();
        state.take_rejection()?;

        let target = state.campaign_mut(campaign)?;
        target.settle_state(now);
        if target.state != RawCampaignState::Failed {
            bail!("execution reverted: Refunds not available.");
        }
        let contributed = target
            .contributions
            .remove(&from.as_str().to_ascii_lowercase())
            .unwrap_or(0);
        if contributed == 0 {
            bail!("execution reverted: No contribution to refund");
        }
        target.balance = target.balance.saturating_sub(contributed);
        *state.wallet_mut(from) += contributed;
        Ok(tx_receipt())
    }
}

#[async_trait]
impl CampaignFactoryPort for InMemoryCampaignLedger {
    async fn get_all_campaigns(&self) -> Result<Vec<CampaignSummary>> {
        Ok(self
            .lock()
            .campaigns
            .iter()
            .map(|c| c.summary(true))
            .collect())
    }

    async fn get_user_campaigns(&self, user: &WalletAddress) -> Result<Vec<CampaignSummary>> {
        Ok(self
            .lock()
            .campaigns
            .iter()
            .filter(|c| c.owner.matches(user))
            .map(|c| c.summary(false))
            .collect())
    }

    async fn create_campaign(
        &self,
        _from: &WalletAddress,
        params: CreateCampaignParams,
    ) -> Result<DeploymentReceipt> {
        self.lock().take_rejection()?;
        if params.goal == 0 {
            bail!("execution reverted: goal must be greater than 0");
        }

        let address = self.deploy(params);
        Ok(DeploymentReceipt {
            transaction_hash: tx_receipt().transaction_hash,
            campaign_address: self.report_deployed_address.then_some(address),
        })
    }
}

#[async_trait]
impl WalletPort for InMemoryCampaignLedger {
    async fn native_balance(&self, address: &WalletAddress) -> Result<u128> {
        Ok(self
            .lock()
            .wallets
            .get(&address.as_str().to_ascii_lowercase())
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct ManualClock(AtomicI64);

    impl ClockPort for ManualClock {
        fn now_ms(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn setup() -> (Arc<ManualClock>, InMemoryCampaignLedger, CampaignAddress) {
        let clock = Arc::new(ManualClock(AtomicI64::new(1_000_000)));
        let ledger = InMemoryCampaignLedger::new(clock.clone());
        let campaign = ledger.deploy(CreateCampaignParams {
            owner: "0xOwner".into(),
            name: "Roof repair".to_string(),
            description: "desc".to_string(),
            goal: 100,
            duration_days: 1,
        });
        ledger.fund_wallet(&"0xDonor".into(), 1_000);
        (clock, ledger, campaign)
    }

    #[tokio::test]
    async fn raw_state_lags_until_a_mutation_settles_it() {
        let (clock, ledger, campaign) = setup();
        ledger.donate(&campaign, &"0xDonor".into(), 40).await.unwrap();

        clock.0.store(1_000_000 + 2 * 86_400_000, Ordering::SeqCst);
        assert_eq!(ledger.state(&campaign).await.unwrap(), 0);

        ledger.refund(&campaign, &"0xdonor".into()).await.unwrap();
        assert_eq!(ledger.state(&campaign).await.unwrap(), 2);
        assert_eq!(ledger.balance(&campaign).await.unwrap(), 0);
        assert_eq!(ledger.native_balance(&"0xDonor".into()).await.unwrap(), 1_000);
    }

    #[tokio::test]
    async fn reaching_the_goal_allows_the_owner_to_withdraw() {
        let (_clock, ledger, campaign) = setup();
        ledger.donate(&campaign, &"0xDonor".into(), 100).await.unwrap();
        assert_eq!(ledger.state(&campaign).await.unwrap(), 1);

        assert!(ledger.withdraw(&campaign, &"0xDonor".into()).await.is_err());
        ledger.withdraw(&campaign, &"0xOWNER".into()).await.unwrap();
        assert_eq!(ledger.balance(&campaign).await.unwrap(), 0);
        assert_eq!(ledger.native_balance(&"0xOwner".into()).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn rejected_prompt_leaves_state_untouched() {
        let (_clock, ledger, campaign) = setup();
        ledger.reject_next_transaction();

        let err = ledger.donate(&campaign, &"0xDonor".into(), 10).await.unwrap_err();
        assert!(err.to_string().contains("rejected"));
        assert_eq!(ledger.balance(&campaign).await.unwrap(), 0);

        ledger.donate(&campaign, &"0xDonor".into(), 10).await.unwrap();
        assert_eq!(ledger.balance(&campaign).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn user_campaign_list_has_no_creation_time() {
        let (_clock, ledger, _campaign) = setup();
        let mine = ledger.get_user_campaigns(&"0xowner".into()).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].creation_time, None);

        let all = ledger.get_all_campaigns().await.unwrap();
        assert_eq!(all[0].creation_time, Some(1_000));
    }
}
