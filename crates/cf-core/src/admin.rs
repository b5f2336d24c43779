//! Administrator allow-list.

use crate::errors::ValidationError;
use crate::ids::WalletAddress;

/// Addresses allowed to review campaign requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRegistry {
    addresses: Vec<WalletAddress>,
}

impl AdminRegistry {
    pub fn new(addresses: Vec<WalletAddress>) -> Self {
        Self { addresses }
    }

    pub fn is_admin(&self, address: Option<&WalletAddress>) -> bool {
        match address {
            Some(address) => self.addresses.iter().any(|admin| admin.matches(address)),
            None => false,
        }
    }

    pub fn ensure_admin(&self, address: &WalletAddress) -> Result<(), ValidationError> {
        if self.is_admin(Some(address)) {
            Ok(())
        } else {
            Err(ValidationError::NotAdmin(address.clone()))
        }
    }

    pub fn addresses(&self) -> &[WalletAddress] {
        &self.addresses
    }
}
