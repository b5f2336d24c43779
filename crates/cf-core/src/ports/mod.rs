//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the external
//! services: the campaign contracts, the document store holding campaign
//! requests, the image host and local preference storage.

mod clock;
pub mod contract;
pub mod factory;
pub mod image_host;
pub mod request_store;
pub mod settings;
pub mod wallet;

pub use clock::ClockPort;
pub use contract::{CampaignContractPort, TxReceipt};
pub use factory::{CampaignFactoryPort, CreateCampaignParams, DeploymentReceipt};
pub use image_host::ImageHostPort;
pub use request_store::{RequestStoreError, RequestStorePort};
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use wallet::WalletPort;
