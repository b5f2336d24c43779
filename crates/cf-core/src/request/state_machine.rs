//! Review lifecycle of a campaign request.
//!
//! ```text
//! pending --reject(reason)--> rejected
//! pending --approve---------> approved (campaign_address, deployed_at)
//! ```
//!
//! Both targets are terminal.

use serde::{Deserialize, Serialize};

use super::model::{CampaignRequest, RequestStatus};
use crate::errors::{LifecycleError, ValidationError};
use crate::ids::CampaignAddress;

/// Outcome of an administrator review, persisted in one conditional write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestResolution {
    Approved {
        campaign_address: CampaignAddress,
        deployed_at: i64,
    },
    Rejected {
        reason: String,
    },
}

impl RequestResolution {
    /// Rejection with a non-blank reason.
    pub fn reject(reason: impl Into<String>) -> Result<Self, ValidationError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(ValidationError::EmptyReason);
        }
        Ok(Self::Rejected { reason })
    }

    pub fn approve(campaign_address: CampaignAddress, deployed_at: i64) -> Self {
        Self::Approved {
            campaign_address,
            deployed_at,
        }
    }

    pub fn target_status(&self) -> RequestStatus {
        match self {
            Self::Approved { .. } => RequestStatus::Approved,
            Self::Rejected { .. } => RequestStatus::Rejected,
        }
    }
}

/// Pure lifecycle rules; stores call [`RequestLifecycle::apply`] inside
/// their conditional update.
pub struct RequestLifecycle;

impl RequestLifecycle {
    pub fn ensure_pending(request: &CampaignRequest) -> Result<(), LifecycleError> {
        if request.is_pending() {
            Ok(())
        } else {
            Err(LifecycleError::NotPending {
                id: request.id.clone(),
                status: request.status,
            })
        }
    }

    pub fn apply(
        mut request: CampaignRequest,
        resolution: RequestResolution,
    ) -> Result<CampaignRequest, LifecycleError> {
        Self::ensure_pending(&request)?;

        request.status = resolution.target_status();
        match resolution {
            RequestResolution::Approved {
                campaign_address,
                deployed_at,
            } => {
                request.campaign_address = Some(campaign_address);
                request.deployed_at = Some(deployed_at);
            }
            RequestResolution::Rejected { reason } => {
                request.rejection_reason = Some(reason);
            }
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CampaignRequestDraft;

    fn pending() -> CampaignRequest {
        CampaignRequest::pending(
            "req-1".into(),
            CampaignRequestDraft {
                creator: "0xAA".into(),
                name: "Medical Fund".to_string(),
                description: "desc".to_string(),
                goal: 1000,
                deadline_days: 30,
                id_image_url: String::new(),
                cover_image_url: String::new(),
                full_name: "Jane".to_string(),
                age: 40,
                is_emergency: false,
                created_at: 0,
            },
        )
    }

    #[test]
    fn reject_requires_reason() {
        assert_eq!(RequestResolution::reject(""), Err(ValidationError::EmptyReason));
        assert_eq!(RequestResolution::reject("  "), Err(ValidationError::EmptyReason));
    }

    #[test]
    fn reject_sets_reason() {
        let resolution = RequestResolution::reject("blurry ID").unwrap();
        let rejected = RequestLifecycle::apply(pending(), resolution).unwrap();
        assert_eq!(rejected.status, RequestStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("blurry ID"));
        assert_eq!(rejected.campaign_address, None);
    }

    #[test]
    fn approve_sets_linkage_atomically() {
        let resolution = RequestResolution::approve("0xCC".into(), 1_234);
        let approved = RequestLifecycle::apply(pending(), resolution).unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert_eq!(approved.campaign_address, Some("0xCC".into()));
        assert_eq!(approved.deployed_at, Some(1_234));
        assert_eq!(approved.rejection_reason, None);
    }

    #[test]
    fn terminal_states_reject_further_transitions() {
        let rejected =
            RequestLifecycle::apply(pending(), RequestResolution::reject("no").unwrap()).unwrap();
        let err = RequestLifecycle::apply(rejected, RequestResolution::approve("0xCC".into(), 1))
            .unwrap_err();
        assert_eq!(
            err,
            LifecycleError::NotPending {
                id: "req-1".into(),
                status: RequestStatus::Rejected
            }
        );
    }
}
