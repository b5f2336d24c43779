//! Display status derivation.
//!
//! The contract only moves its stored state away from `Active` when a
//! transaction triggers it, so between deadline expiry and that transaction
//! the raw state lags behind. The derived status reconciles the raw state
//! with the goal and deadline arithmetic.

use serde::{Deserialize, Serialize};

use super::model::RawCampaignState;

/// Lifecycle label shown for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedStatus {
    Active,
    Successful,
    Failed,
}

impl DerivedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Successful => "successful",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a campaign whose reads may not have resolved yet.
///
/// `Loading` is transient: it never describes a terminal campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum StatusView {
    Loading,
    Resolved(DerivedStatus),
}

impl StatusView {
    pub fn resolved(&self) -> Option<DerivedStatus> {
        match self {
            Self::Loading => None,
            Self::Resolved(status) => Some(*status),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "unknown",
            Self::Resolved(status) => status.as_str(),
        }
    }
}

impl std::fmt::Display for StatusView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive the display status of a campaign.
///
/// Any missing input yields [`StatusView::Loading`]. Otherwise the first
/// matching rule wins:
///
/// 1. failed: raw state is failed, or active with the deadline reached and
///    the goal missed;
/// 2. successful: raw state is successful, or active with the goal met
///    (even past the deadline);
/// 3. active: raw state is active, deadline ahead, goal not met.
///
/// An unrecognized raw state code also stays [`StatusView::Loading`].
/// `now` and `deadline` are unix seconds.
pub fn derive_status(
    raw_state: Option<u8>,
    deadline: Option<u64>,
    balance: Option<u128>,
    goal: Option<u128>,
    now: u64,
) -> StatusView {
    let (Some(raw), Some(deadline), Some(balance), Some(goal)) = (raw_state, deadline, balance, goal)
    else {
        return StatusView::Loading;
    };

    let Some(raw) = RawCampaignState::from_code(raw) else {
        return StatusView::Loading;
    };

    let expired = now >= deadline;
    let goal_met = balance >= goal;

    let status = match raw {
        RawCampaignState::Failed => DerivedStatus::Failed,
        RawCampaignState::Successful => DerivedStatus::Successful,
        RawCampaignState::Active if goal_met => DerivedStatus::Successful,
        RawCampaignState::Active if expired => DerivedStatus::Failed,
        RawCampaignState::Active => DerivedStatus::Active,
    };
    StatusView::Resolved(status)
}
