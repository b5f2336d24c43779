use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;

use cf_core::errors::LifecycleError;
use cf_core::ports::{RequestStoreError, RequestStorePort};
use cf_core::request::{
    CampaignRequest, CampaignRequestDraft, RequestLifecycle, RequestResolution, RequestStatus,
};
use cf_core::{RequestId, WalletAddress};

use crate::db::models::{CampaignRequestRow, NewCampaignRequestRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::campaign_request::dsl::*;

diesel::define_sql_function!(fn lower(x: Text) -> Text);

fn storage(err: impl std::fmt::Display) -> RequestStoreError {
    RequestStoreError::Storage(err.to_string())
}

/// Sqlite-backed `campaigns` collection.
pub struct DieselCampaignRequestRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselCampaignRequestRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

impl<E, M> DieselCampaignRequestRepository<E, M>
where
    M: RowMapper<CampaignRequestRow, CampaignRequest>,
{
    fn map_rows(&self, rows: Vec<CampaignRequestRow>) -> anyhow::Result<Vec<CampaignRequest>> {
        let mut requests = Vec::with_capacity(rows.len());
        for row in rows {
            let request = self.mapper.to_domain(&row).map_err(|e| {
                anyhow::anyhow!("Failed to map campaign_request {}: {}", row.id, e)
            })?;
            requests.push(request);
        }
        Ok(requests)
    }
}

#[async_trait]
impl<E, M> RequestStorePort for DieselCampaignRequestRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<CampaignRequest, NewCampaignRequestRow>
        + RowMapper<CampaignRequestRow, CampaignRequest>
        + Send
        + Sync,
{
    async fn create(
        &self,
        draft: CampaignRequestDraft,
    ) -> Result<CampaignRequest, RequestStoreError> {
        let request = CampaignRequest::pending(RequestId::new(), draft);
        let row = self.mapper.to_row(&request).map_err(storage)?;

        self.executor
            .run(move |conn| {
                diesel::insert_into(campaign_request)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(storage)?;

        Ok(request)
    }

    async fn get(
        &self,
        request_id: &RequestId,
    ) -> Result<Option<CampaignRequest>, RequestStoreError> {
        let key = request_id.as_str().to_string();
        self.executor
            .run(move |conn| {
                let row = campaign_request
                    .filter(id.eq(&key))
                    .select(CampaignRequestRow::as_select())
                    .first(conn)
                    .optional()?;

                match row {
                    Some(r) => Ok(Some(self.mapper.to_domain(&r)?)),
                    None => Ok(None),
                }
            })
            .map_err(storage)
    }

    async fn list_by_status(
        &self,
        wanted: RequestStatus,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError> {
        self.executor
            .run(move |conn| {
                let rows = campaign_request
                    .filter(status.eq(wanted.as_str()))
                    .order(created_at.desc())
                    .select(CampaignRequestRow::as_select())
                    .load(conn)?;
                self.map_rows(rows)
            })
            .map_err(storage)
    }

    async fn list_by_creator(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Vec<CampaignRequest>, RequestStoreError> {
        let key = wallet.as_str().to_lowercase();
        self.executor
            .run(move |conn| {
                let rows = campaign_request
                    .filter(lower(creator).eq(&key))
                    .order(created_at.desc())
                    .select(CampaignRequestRow::as_select())
                    .load(conn)?;
                self.map_rows(rows)
            })
            .map_err(storage)
    }

    async fn find_by_name(
        &self,
        campaign_name: &str,
    ) -> Result<Option<CampaignRequest>, RequestStoreError> {
        let key = campaign_name.to_string();
        self.executor
            .run(move |conn| {
                let row = campaign_request
                    .filter(name.eq(&key))
                    .order(created_at.asc())
                    .select(CampaignRequestRow::as_select())
                    .first(conn)
                    .optional()?;

                match row {
                    Some(r) => Ok(Some(self.mapper.to_domain(&r)?)),
                    None => Ok(None),
                }
            })
            .map_err(storage)
    }

    async fn update_if_pending(
        &self,
        request_id: &RequestId,
        resolution: RequestResolution,
    ) -> Result<CampaignRequest, RequestStoreError> {
        let key = request_id.as_str().to_string();
        let missing = request_id.clone();

        self.executor
            .run(move |conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    let row = campaign_request
                        .filter(id.eq(&key))
                        .select(CampaignRequestRow::as_select())
                        .first(conn)
                        .optional()?;
                    let Some(row) = row else {
                        return Ok(Err(RequestStoreError::NotFound(missing)));
                    };

                    let current = self.mapper.to_domain(&row)?;
                    let updated = match RequestLifecycle::apply(current, resolution) {
                        Ok(updated) => updated,
                        Err(LifecycleError::NotPending {
                            id: rejected_id,
                            status: current_status,
                        }) => {
                            return Ok(Err(RequestStoreError::NotPending {
                                id: rejected_id,
                                status: current_status,
                            }))
                        }
                    };

                    diesel::update(
                        campaign_request
                            .filter(id.eq(&key))
                            .filter(status.eq(RequestStatus::Pending.as_str())),
                    )
                    .set((
                        status.eq(updated.status.as_str()),
                        rejection_reason.eq(updated.rejection_reason.clone()),
                        campaign_address
                            .eq(updated.campaign_address.as_ref().map(|a| a.as_str().to_string())),
                        deployed_at.eq(updated.deployed_at),
                    ))
                    .execute(conn)?;

                    Ok(Ok(updated))
                })
            })
            .map_err(storage)?
    }
}
