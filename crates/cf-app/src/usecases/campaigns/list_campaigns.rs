use std::sync::Arc;

use cf_core::listing::{apply, ListedCampaign, ListingPage, ListingQuery, Window};
use cf_core::network::{ReadContextTracker, Tagged};
use cf_core::ports::{CampaignContractPort, CampaignFactoryPort, ClockPort};
use cf_core::CrowdfundError;
use futures::future::join_all;
use tracing::{debug, info};

use super::reads::read_status_fields;

/// Use case for the public campaign list.
///
/// Fetches the factory list, reads every campaign concurrently, derives the
/// display statuses and runs the listing pipeline. The result is tagged with
/// the read context it was issued under; a chain switch or invalidation
/// while the reads were in flight turns it into `Tagged::Stale`.
pub struct ListCampaigns {
    factory: Arc<dyn CampaignFactoryPort>,
    contract: Arc<dyn CampaignContractPort>,
    clock: Arc<dyn ClockPort>,
    read_context: Arc<ReadContextTracker>,
}

impl ListCampaigns {
    pub fn new(
        factory: Arc<dyn CampaignFactoryPort>,
        contract: Arc<dyn CampaignContractPort>,
        clock: Arc<dyn ClockPort>,
        read_context: Arc<ReadContextTracker>,
    ) -> Self {
        Self {
            factory,
            contract,
            clock,
            read_context,
        }
    }

    #[tracing::instrument(
        name = "usecase.list_campaigns.execute",
        skip(self),
        fields(filter = %query.status_filter, prioritize_flagged = query.prioritize_flagged)
    )]
    pub async fn execute(
        &self,
        query: &ListingQuery,
        window: Window,
    ) -> Result<Tagged<ListingPage>, CrowdfundError> {
        let context = self.read_context.current();

        let summaries = self
            .factory
            .get_all_campaigns()
            .await
            .map_err(CrowdfundError::network)?;

        let readings = join_all(
            summaries
                .iter()
                .map(|s| read_status_fields(&self.contract, &s.campaign_address)),
        )
        .await;

        let now = self.clock.now_secs();
        let listed: Vec<ListedCampaign> = summaries
            .into_iter()
            .zip(readings)
            .map(|(summary, readings)| ListedCampaign {
                summary,
                status: readings.status(now),
            })
            .collect();

        let page = apply(&listed, query, window);
        info!(
            campaigns = listed.len(),
            matching = page.total_matching,
            shown = page.items.len(),
            "campaign list resolved"
        );

        let tagged = self.read_context.accept(&context, page);
        if matches!(tagged, Tagged::Stale) {
            debug!(chain = %context.chain, generation = context.generation, "discarding stale campaign list");
        }
        Ok(tagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cf_core::campaign::CampaignSummary;
    use cf_core::listing::StatusFilter;
    use cf_core::network::Chain;
    use cf_core::ports::{CreateCampaignParams, DeploymentReceipt, TxReceipt};
    use cf_core::{CampaignAddress, DerivedStatus, StatusView, WalletAddress};

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            1_000_000
        }
    }

    struct Factory {
        campaigns: Vec<CampaignSummary>,
        tracker: Option<Arc<ReadContextTracker>>,
    }

    #[async_trait]
    impl CampaignFactoryPort for Factory {
        async fn get_all_campaigns(&self) -> anyhow::Result<Vec<CampaignSummary>> {
            if let Some(tracker) = &self.tracker {
                tracker.switch_chain(Chain::Sepolia);
            }
            Ok(self.campaigns.clone())
        }

        async fn get_user_campaigns(
            &self,
            _user: &WalletAddress,
        ) -> anyhow::Result<Vec<CampaignSummary>> {
            Ok(Vec::new())
        }

        async fn create_campaign(
            &self,
            _from: &WalletAddress,
            _params: CreateCampaignParams,
        ) -> anyhow::Result<DeploymentReceipt> {
            anyhow::bail!("not used")
        }
    }

    /// Campaign "0xA" is active, "0xB" successful, "0xC" cannot be read.
    struct Contract;

    #[async_trait]
    impl CampaignContractPort for Contract {
        async fn name(&self, c: &CampaignAddress) -> anyhow::Result<String> {
            Ok(c.to_string())
        }
        async fn description(&self, _c: &CampaignAddress) -> anyhow::Result<String> {
            Ok(String::new())
        }
        async fn goal(&self, _c: &CampaignAddress) -> anyhow::Result<u128> {
            Ok(100)
        }
        async fn balance(&self, c: &CampaignAddress) -> anyhow::Result<u128> {
            match c.as_str() {
                "0xB" => Ok(100),
                "0xC" => anyhow::bail!("rpc timeout"),
                _ => Ok(10),
            }
        }
        async fn deadline(&self, _c: &CampaignAddress) -> anyhow::Result<u64> {
            Ok(5_000)
        }
        async fn owner(&self, _c: &CampaignAddress) -> anyhow::Result<WalletAddress> {
            Ok("0xAA".into())
        }
        async fn state(&self, _c: &CampaignAddress) -> anyhow::Result<u8> {
            Ok(0)
        }
        async fn donate(
            &self,
            _c: &CampaignAddress,
            _from: &WalletAddress,
            _value: u128,
        ) -> anyhow::Result<TxReceipt> {
            anyhow::bail!("not used")
        }
        async fn withdraw(
            &self,
            _c: &CampaignAddress,
            _from: &WalletAddress,
        ) -> anyhow::Result<TxReceipt> {
            anyhow::bail!("not used")
        }
        async fn refund(&self, _c: &CampaignAddress, _from: &WalletAddress) -> anyhow::Result<TxReceipt> {
            anyhow::bail!("not used")
        }
    }

    fn summary(address: &str, created: u64) -> CampaignSummary {
        CampaignSummary {
            campaign_address: address.into(),
            owner: "0xAA".into(),
            name: address.to_string(),
            creation_time: Some(created),
        }
    }

    fn use_case(switch_during_read: bool) -> ListCampaigns {
        let tracker = Arc::new(ReadContextTracker::default());
        ListCampaigns::new(
            Arc::new(Factory {
                campaigns: vec![summary("0xA", 10), summary("0xB", 20), summary("0xC", 30)],
                tracker: switch_during_read.then(|| tracker.clone()),
            }),
            Arc::new(Contract),
            Arc::new(FixedClock),
            tracker,
        )
    }

    #[tokio::test]
    async fn unreadable_campaigns_are_left_out_of_the_list() {
        let page = use_case(false)
            .execute(&ListingQuery::default(), Window::Reveal { visible: 9 })
            .await
            .unwrap()
            .into_fresh()
            .unwrap();

        let addresses: Vec<&str> = page
            .items
            .iter()
            .map(|c| c.summary.campaign_address.as_str())
            .collect();
        assert_eq!(addresses, vec!["0xB", "0xA"]);
        assert_eq!(
            page.items[0].status,
            StatusView::Resolved(DerivedStatus::Successful)
        );
    }

    #[tokio::test]
    async fn status_filter_is_applied() {
        let query = ListingQuery {
            status_filter: StatusFilter::Active,
            prioritize_flagged: false,
        };
        let page = use_case(false)
            .execute(&query, Window::Page { number: 1, size: 9 })
            .await
            .unwrap()
            .into_fresh()
            .unwrap();
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items[0].summary.campaign_address.as_str(), "0xA");
    }

    #[tokio::test]
    async fn chain_switch_during_reads_discards_the_result() {
        let result = use_case(true)
            .execute(&ListingQuery::default(), Window::Reveal { visible: 9 })
            .await
            .unwrap();
        assert!(matches!(result, Tagged::Stale));
    }
}
