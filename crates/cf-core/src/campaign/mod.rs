//! On-chain campaign projection and the rules derived from it.

pub mod donation;
pub mod model;
pub mod progress;
pub mod status;

pub use donation::{parse_amount, plan_donation, DonationPlan};
pub use model::{CampaignOnChainView, CampaignReadings, CampaignSummary, RawCampaignState};
pub use progress::{can_withdraw, days_left, funding_percentage, funds_withdrawn, is_flagged};
pub use status::{derive_status, DerivedStatus, StatusView};
