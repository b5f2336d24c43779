mod campaign_request_row;

pub use campaign_request_row::{CampaignRequestRow, NewCampaignRequestRow};
