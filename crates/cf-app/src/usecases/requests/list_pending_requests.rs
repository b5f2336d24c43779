use std::sync::Arc;

use cf_core::listing::{window_items, ListingPage, Window};
use cf_core::ports::RequestStorePort;
use cf_core::request::sort_newest_first;
use cf_core::{AdminRegistry, CampaignRequest, CrowdfundError, RequestStatus, WalletAddress};
use tracing::info;

/// Administrator review queue: pending requests, newest first, paginated.
pub struct ListPendingRequests {
    request_store: Arc<dyn RequestStorePort>,
    admins: Arc<AdminRegistry>,
    page_size: usize,
}

impl ListPendingRequests {
    pub fn new(
        request_store: Arc<dyn RequestStorePort>,
        admins: Arc<AdminRegistry>,
        page_size: usize,
    ) -> Self {
        Self {
            request_store,
            admins,
            page_size,
        }
    }

    #[tracing::instrument(
        name = "usecase.list_pending_requests.execute",
        skip(self),
        fields(viewer = %viewer, page)
    )]
    pub async fn execute(
        &self,
        viewer: &WalletAddress,
        page: usize,
    ) -> Result<ListingPage<CampaignRequest>, CrowdfundError> {
        self.admins.ensure_admin(viewer)?;

        let mut pending = self.request_store.list_by_status(RequestStatus::Pending).await?;
        sort_newest_first(&mut pending);

        let result = window_items(
            pending,
            Window::Page {
                number: page,
                size: self.page_size,
            },
        );
        info!(
            pending = result.total_matching,
            shown = result.items.len(),
            "pending requests listed"
        );
        Ok(result)
    }
}
