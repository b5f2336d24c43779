use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignAddress, RequestId, WalletAddress};

/// Review status of a campaign request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown request status: {other}")),
        }
    }
}

/// Validated submission, ready to be stored as a pending request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequestDraft {
    pub creator: WalletAddress,
    /// Final campaign name, including the emergency prefix when flagged.
    pub name: String,
    pub description: String,
    pub goal: u128,
    pub deadline_days: u32,
    pub id_image_url: String,
    pub cover_image_url: String,
    pub full_name: String,
    pub age: u32,
    pub is_emergency: bool,
    /// Milliseconds since epoch.
    pub created_at: i64,
}

/// Off-chain campaign request awaiting (or past) administrator review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub id: RequestId,
    pub creator: WalletAddress,
    pub name: String,
    pub description: String,
    pub goal: u128,
    pub deadline_days: u32,
    pub id_image_url: String,
    pub cover_image_url: String,
    pub full_name: String,
    pub age: u32,
    pub is_emergency: bool,
    pub status: RequestStatus,
    /// Set only when rejected.
    pub rejection_reason: Option<String>,
    /// Set only when approved; empty when the deployment could not be linked.
    pub campaign_address: Option<CampaignAddress>,
    pub created_at: i64,
    pub deployed_at: Option<i64>,
}

impl CampaignRequest {
    /// Materialize a draft under a store-assigned id.
    pub fn pending(id: RequestId, draft: CampaignRequestDraft) -> Self {
        Self {
            id,
            creator: draft.creator,
            name: draft.name,
            description: draft.description,
            goal: draft.goal,
            deadline_days: draft.deadline_days,
            id_image_url: draft.id_image_url,
            cover_image_url: draft.cover_image_url,
            full_name: draft.full_name,
            age: draft.age,
            is_emergency: draft.is_emergency,
            status: RequestStatus::Pending,
            rejection_reason: None,
            campaign_address: None,
            created_at: draft.created_at,
            deployed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Approved with an empty campaign address.
    pub fn needs_reconciliation(&self) -> bool {
        self.status == RequestStatus::Approved
            && self
                .campaign_address
                .as_ref()
                .map_or(true, CampaignAddress::is_empty)
    }
}

/// Sort newest submission first.
pub fn sort_newest_first(requests: &mut [CampaignRequest]) {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
