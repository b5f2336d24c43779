//! Submission and administrator review of campaign requests.

pub mod approve_request;
pub mod list_pending_requests;
pub mod reject_request;
pub mod submit_request;

pub use approve_request::{ApprovalOutcome, ApproveCampaignRequest};
pub use list_pending_requests::ListPendingRequests;
pub use reject_request::RejectCampaignRequest;
pub use submit_request::SubmitCampaignRequest;
