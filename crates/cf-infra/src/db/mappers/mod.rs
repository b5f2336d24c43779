pub mod campaign_request_mapper;

pub use campaign_request_mapper::CampaignRequestRowMapper;
