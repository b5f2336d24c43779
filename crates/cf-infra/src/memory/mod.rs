//! In-process stand-ins for the hosted services.
//!
//! Used when no sqlite path is configured and as fixtures in tests.

mod chain_ledgers;
mod ledger;
mod request_store;

pub use chain_ledgers::ChainScopedLedgers;
pub use ledger::InMemoryCampaignLedger;
pub use request_store::InMemoryRequestStore;
