//! # Application Dependencies
//!
//! Parameter grouping for use case construction. No defaults and no
//! hidden logic: every port is required.

use std::sync::Arc;

use cf_core::ports::*;
use cf_core::{AdminRegistry, ReadContextTracker};

/// Listing and linkage tunables, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTunables {
    pub page_size: usize,
    pub reveal_step: usize,
    pub pending_page_size: usize,
    pub creation_window_secs: u64,
}

pub struct AppDeps {
    // Contract system
    pub contract: Arc<dyn CampaignContractPort>,
    pub factory: Arc<dyn CampaignFactoryPort>,
    pub wallet: Arc<dyn WalletPort>,

    // Off-chain services
    pub request_store: Arc<dyn RequestStorePort>,
    pub image_host: Arc<dyn ImageHostPort>,

    // Local state
    pub settings: Arc<dyn SettingsPort>,
    pub read_context: Arc<ReadContextTracker>,
    pub admins: Arc<AdminRegistry>,

    // System
    pub clock: Arc<dyn ClockPort>,

    pub tunables: AppTunables,
}
