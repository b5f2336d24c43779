use async_trait::async_trait;
use thiserror::Error;

use crate::errors::{CrowdfundError, LifecycleError};
use crate::ids::{RequestId, WalletAddress};
use crate::request::{CampaignRequest, CampaignRequestDraft, RequestResolution, RequestStatus};

#[derive(Debug, Error)]
pub enum RequestStoreError {
    #[error("request not found: {0}")]
    NotFound(RequestId),

    /// The conditional update lost against another reviewer.
    #[error("request {id} is no longer pending (status: {status})")]
    NotPending { id: RequestId, status: RequestStatus },

    #[error("storage error: {0}")]
    Storage(String),
}

/// The `campaigns` collection of the document store.
#[async_trait]
pub trait RequestStorePort: Send + Sync {
    /// Store a new pending request; the store assigns the id.
    async fn create(&self, draft: CampaignRequestDraft)
        -> Result<CampaignRequest, RequestStoreError>;

    async fn get(&self, id: &RequestId) -> Result<Option<CampaignRequest>, RequestStoreError>;

    async fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError>;

    async fn list_by_creator(
        &self,
        creator: &WalletAddress,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError>;

    /// First request stored under exactly this name.
    async fn find_by_name(&self, name: &str)
        -> Result<Option<CampaignRequest>, RequestStoreError>;

    /// Persist a review outcome only if the request is still pending.
    async fn update_if_pending(
        &self,
        id: &RequestId,
        resolution: RequestResolution,
    ) -> Result<CampaignRequest, RequestStoreError>;
}

impl From<RequestStoreError> for CrowdfundError {
    fn from(err: RequestStoreError) -> Self {
        match err {
            RequestStoreError::NotFound(id) => CrowdfundError::RequestNotFound(id),
            RequestStoreError::NotPending { id, status } => {
                CrowdfundError::Lifecycle(LifecycleError::NotPending { id, status })
            }
            RequestStoreError::Storage(message) => CrowdfundError::Storage(message),
        }
    }
}
