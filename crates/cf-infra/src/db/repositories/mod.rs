mod campaign_request_repo;

pub use campaign_request_repo::DieselCampaignRequestRepository;
