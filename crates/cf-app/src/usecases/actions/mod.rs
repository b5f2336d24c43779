//! Donor and owner actions on a deployed campaign.
//!
//! Every action resolves only after the transaction is confirmed and then
//! refetches the campaign balance exactly once.

pub mod donate;
pub mod refund;
pub mod withdraw;

pub use donate::{Donate, DonationOutcome};
pub use refund::Refund;
pub use withdraw::Withdraw;

use cf_core::ports::TxReceipt;

/// Confirmed action plus the balance read right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub receipt: TxReceipt,
    /// `None` when the refetch failed.
    pub balance: Option<u128>,
}
