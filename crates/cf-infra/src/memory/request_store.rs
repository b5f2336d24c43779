use async_trait::async_trait;
use tokio::sync::RwLock;

use cf_core::errors::LifecycleError;
use cf_core::ports::{RequestStoreError, RequestStorePort};
use cf_core::request::{
    CampaignRequest, CampaignRequestDraft, RequestLifecycle, RequestResolution, RequestStatus,
};
use cf_core::{RequestId, WalletAddress};

/// Request store kept in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryRequestStore {
    requests: RwLock<Vec<CampaignRequest>>,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolution goes through the same lifecycle checks as the sqlite store,
/// under one write lock, so two reviewers cannot both resolve a request.
#[async_trait]
impl RequestStorePort for InMemoryRequestStore {
    async fn create(
        &self,
        draft: CampaignRequestDraft,
    ) -> Result<CampaignRequest, RequestStoreError> {
        let request = CampaignRequest::pending(RequestId::new(), draft);
        self.requests.write().await.push(request.clone());
        Ok(request)
    }

    async fn get(&self, id: &RequestId) -> Result<Option<CampaignRequest>, RequestStoreError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_creator(
        &self,
        creator: &WalletAddress,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .filter(|r| r.creator.matches(creator))
            .cloned()
            .collect())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CampaignRequest>, RequestStoreError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn update_if_pending(
        &self,
        id: &RequestId,
        resolution: RequestResolution,
    ) -> Result<CampaignRequest, RequestStoreError> {
        let mut requests = self.requests.write().await;
        let slot = requests
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RequestStoreError::NotFound(id.clone()))?;

        let updated = RequestLifecycle::apply(slot.clone(), resolution).map_err(|e| match e {
            LifecycleError::NotPending { id, status } => RequestStoreError::NotPending { id, status },
        })?;
        *slot = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, created_at: i64) -> CampaignRequestDraft {
        CampaignRequestDraft {
            creator: "0xAbC".into(),
            name: name.to_string(),
            description: "desc".to_string(),
            goal: 100,
            deadline_days: 30,
            id_image_url: "https://img/id.png".to_string(),
            cover_image_url: "https://img/cover.png".to_string(),
            full_name: "Jane Doe".to_string(),
            age: 30,
            is_emergency: false,
            created_at,
        }
    }

    #[tokio::test]
    async fn second_resolution_loses() {
        let store = InMemoryRequestStore::new();
        let request = store.create(draft("Fund", 1)).await.unwrap();

        store
            .update_if_pending(&request.id, RequestResolution::reject("spam").unwrap())
            .await
            .unwrap();
        let err = store
            .update_if_pending(
                &request.id,
                RequestResolution::approve("0xC".into(), 2),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RequestStoreError::NotPending {
                status: RequestStatus::Rejected,
                ..
            }
        ));
        let stored = store.get(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.rejection_reason.as_deref(), Some("spam"));
        assert_eq!(stored.campaign_address, None);
    }

    #[tokio::test]
    async fn creator_lookup_ignores_address_case() {
        let store = InMemoryRequestStore::new();
        store.create(draft("Fund", 1)).await.unwrap();

        let found = store.list_by_creator(&"0xabc".into()).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = InMemoryRequestStore::new();
        let err = store
            .update_if_pending(&"missing".into(), RequestResolution::reject("x").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, RequestStoreError::NotFound(_)));
    }
}
