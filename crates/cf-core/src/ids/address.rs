use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Externally owned account address (wallet of a creator, donor or admin).
///
/// Hex addresses are checksummed by some wallets and lower-cased by others,
/// so equality between addresses coming from different sources goes through
/// [`WalletAddress::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

/// Address of a deployed campaign contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignAddress(String);

impl_id!(WalletAddress, CampaignAddress);

impl WalletAddress {
    /// Case-insensitive comparison.
    pub fn matches(&self, other: &WalletAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl CampaignAddress {
    /// Empty linkage placeholder stored when a deployment could not be matched.
    pub fn unlinked() -> Self {
        Self(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_address_matches_ignores_case() {
        let checksummed = WalletAddress::from("0xb9Cc84c1291aD9441357df5a111145Bf9459107d");
        let lower = WalletAddress::from("0xb9cc84c1291ad9441357df5a111145bf9459107d");
        assert!(checksummed.matches(&lower));
        assert_ne!(checksummed, lower);
    }

    #[test]
    fn unlinked_campaign_address_is_empty() {
        assert!(CampaignAddress::unlinked().is_empty());
        assert_eq!(CampaignAddress::unlinked().to_string(), "");
    }
}
