//! Read-side use cases over the contract system.

pub mod get_campaign_detail;
pub mod get_creator_dashboard;
pub mod list_campaigns;
mod reads;

pub use get_campaign_detail::{CampaignDetail, CampaignMetadata, GetCampaignDetail};
pub use get_creator_dashboard::{CreatorDashboard, GetCreatorDashboard};
pub use list_campaigns::ListCampaigns;

pub(crate) use reads::{read_status_fields, refetch_balance};
