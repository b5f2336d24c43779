//! # cf-core
//!
//! Core domain models and decision rules of the crowdfunding client.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies; external services are reached through [`ports`].

pub mod admin;
pub mod campaign;
pub mod config;
pub mod errors;
pub mod ids;
pub mod listing;
pub mod network;
pub mod ports;
pub mod request;
pub mod settings;

// Re-export commonly used types at the crate root
pub use admin::AdminRegistry;
pub use campaign::{CampaignOnChainView, CampaignSummary, DerivedStatus, StatusView};
pub use config::AppConfig;
pub use errors::{CrowdfundError, InconsistencyError, NetworkError, ValidationError};
pub use ids::{CampaignAddress, RequestId, WalletAddress};
pub use listing::{ListingQuery, ListingState, StatusFilter, Window};
pub use network::{Chain, ReadContext, ReadContextTracker};
pub use request::{CampaignRequest, RequestStatus};
