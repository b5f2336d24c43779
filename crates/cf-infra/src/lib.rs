//! # cf-infra
//!
//! Adapters for the ports declared in `cf-core`: the sqlite request store,
//! in-memory stand-ins for the contract system and the document store, the
//! HTTP image host, file-backed settings and the system clock.

pub mod db;
pub mod image_host;
pub mod memory;
pub mod settings;
pub mod time;

pub use image_host::HttpImageHost;
pub use memory::{ChainScopedLedgers, InMemoryCampaignLedger, InMemoryRequestStore};
pub use settings::FileSettingsRepository;
pub use time::SystemClock;
