//! ID type wrappers for type safety.

mod id_macro;

pub mod address;
pub mod request_id;

pub use address::{CampaignAddress, WalletAddress};
pub use request_id::RequestId;
