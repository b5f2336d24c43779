use anyhow::{anyhow, Context, Result};
use cf_core::request::RequestStatus;
use cf_core::{CampaignAddress, CampaignRequest, RequestId, WalletAddress};

use crate::db::models::{CampaignRequestRow, NewCampaignRequestRow};
use crate::db::ports::{InsertMapper, RowMapper};

/// Maps `campaign_request` rows. `goal` is stored as decimal text since
/// sqlite has no 128-bit integer.
pub struct CampaignRequestRowMapper;

impl InsertMapper<CampaignRequest, NewCampaignRequestRow> for CampaignRequestRowMapper {
    fn to_row(&self, domain: &CampaignRequest) -> Result<NewCampaignRequestRow> {
        Ok(NewCampaignRequestRow {
            id: domain.id.as_str().to_string(),
            creator: domain.creator.as_str().to_string(),
            name: domain.name.clone(),
            description: domain.description.clone(),
            goal: domain.goal.to_string(),
            deadline_days: i32::try_from(domain.deadline_days)
                .context("deadline_days out of range")?,
            id_image_url: domain.id_image_url.clone(),
            cover_image_url: domain.cover_image_url.clone(),
            full_name: domain.full_name.clone(),
            age: i32::try_from(domain.age).context("age out of range")?,
            is_emergency: domain.is_emergency,
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
        })
    }
}

impl RowMapper<CampaignRequestRow, CampaignRequest> for CampaignRequestRowMapper {
    fn to_domain(&self, row: &CampaignRequestRow) -> Result<CampaignRequest> {
        Ok(CampaignRequest {
            id: RequestId::from(row.id.as_str()),
            creator: WalletAddress::from(row.creator.as_str()),
            name: row.name.clone(),
            description: row.description.clone(),
            goal: row
                .goal
                .parse()
                .map_err(|_| anyhow!("invalid goal for request {}: {}", row.id, row.goal))?,
            deadline_days: u32::try_from(row.deadline_days)
                .map_err(|_| anyhow!("invalid deadline_days: {}", row.deadline_days))?,
            id_image_url: row.id_image_url.clone(),
            cover_image_url: row.cover_image_url.clone(),
            full_name: row.full_name.clone(),
            age: u32::try_from(row.age).map_err(|_| anyhow!("invalid age: {}", row.age))?,
            is_emergency: row.is_emergency,
            status: row
                .status
                .parse::<RequestStatus>()
                .map_err(|e| anyhow!(e))?,
            rejection_reason: row.rejection_reason.clone(),
            campaign_address: row.campaign_address.as_deref().map(CampaignAddress::from),
            created_at: row.created_at,
            deployed_at: row.deployed_at,
        })
    }
}
