use anyhow::Result;
use async_trait::async_trait;

use crate::ids::WalletAddress;

#[async_trait]
pub trait WalletPort: Send + Sync {
    /// Native-currency balance, used for affordability and fee checks.
    async fn native_balance(&self, address: &WalletAddress) -> Result<u128>;
}
