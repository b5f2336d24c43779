use serde::{Deserialize, Serialize};

use super::status::{derive_status, StatusView};
use crate::ids::{CampaignAddress, WalletAddress};

/// Tri-valued state as stored by the campaign contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawCampaignState {
    Active,
    Successful,
    Failed,
}

impl RawCampaignState {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Active),
            1 => Some(Self::Successful),
            2 => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Successful => 1,
            Self::Failed => 2,
        }
    }
}

/// Read-only projection of one campaign contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignOnChainView {
    pub address: CampaignAddress,
    pub name: String,
    pub description: String,
    /// Target amount in the smallest currency unit.
    pub goal: u128,
    pub balance: u128,
    /// Unix seconds.
    pub deadline: u64,
    pub owner: WalletAddress,
    pub raw_state: RawCampaignState,
    /// Unix seconds.
    pub creation_time: u64,
}

impl CampaignOnChainView {
    pub fn readings(&self) -> CampaignReadings {
        CampaignReadings {
            raw_state: Some(self.raw_state.code()),
            deadline: Some(self.deadline),
            balance: Some(self.balance),
            goal: Some(self.goal),
        }
    }

    pub fn status(&self, now: u64) -> StatusView {
        self.readings().status(now)
    }
}

/// Entry of the factory campaign list.
///
/// `getUserCampaigns` does not report a creation time, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub campaign_address: CampaignAddress,
    pub owner: WalletAddress,
    pub name: String,
    pub creation_time: Option<u64>,
}

/// Outcome of the independent per-field contract reads of one campaign.
///
/// Each field is `None` while its read is in flight or after it failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignReadings {
    pub raw_state: Option<u8>,
    pub deadline: Option<u64>,
    pub balance: Option<u128>,
    pub goal: Option<u128>,
}

impl CampaignReadings {
    pub fn status(&self, now: u64) -> StatusView {
        derive_status(self.raw_state, self.deadline, self.balance, self.goal, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::DerivedStatus;

    #[test]
    fn raw_state_codes_round_trip_for_known_values() {
        for state in [
            RawCampaignState::Active,
            RawCampaignState::Successful,
            RawCampaignState::Failed,
        ] {
            assert_eq!(RawCampaignState::from_code(state.code()), Some(state));
        }
        assert_eq!(RawCampaignState::from_code(3), None);
    }

    #[test]
    fn partial_readings_are_loading() {
        let readings = CampaignReadings {
            raw_state: Some(0),
            deadline: Some(100),
            balance: None,
            goal: Some(10),
        };
        assert_eq!(readings.status(50), StatusView::Loading);
    }

    #[test]
    fn on_chain_view_derives_status_from_its_fields() {
        let view = CampaignOnChainView {
            address: "0xCC".into(),
            name: "Medical Fund".to_string(),
            description: "help".to_string(),
            goal: 1000,
            balance: 1000,
            deadline: 10,
            owner: "0xAA".into(),
            raw_state: RawCampaignState::Active,
            creation_time: 1,
        };
        assert_eq!(
            view.status(20),
            StatusView::Resolved(DerivedStatus::Successful)
        );
    }
}
