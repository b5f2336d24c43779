//! Business logic use cases
//!
//! Each use case holds only the ports it needs; [`UseCases`] wires them
//! from [`AppDeps`] in one place.

pub mod actions;
pub mod campaigns;
pub mod requests;
pub mod settings;

pub use actions::{ActionOutcome, Donate, DonationOutcome, Refund, Withdraw};
pub use campaigns::{
    CampaignDetail, CampaignMetadata, CreatorDashboard, GetCampaignDetail, GetCreatorDashboard,
    ListCampaigns,
};
pub use requests::{
    ApprovalOutcome, ApproveCampaignRequest, ListPendingRequests, RejectCampaignRequest,
    SubmitCampaignRequest,
};
pub use settings::{GetListingPreferences, UpdateListingPreferences};

use crate::deps::AppDeps;

/// Use case accessor over the application dependencies.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn list_campaigns(&self) -> ListCampaigns {
        ListCampaigns::new(
            self.deps.factory.clone(),
            self.deps.contract.clone(),
            self.deps.clock.clone(),
            self.deps.read_context.clone(),
        )
    }

    pub fn get_campaign_detail(&self) -> GetCampaignDetail {
        GetCampaignDetail::new(
            self.deps.contract.clone(),
            self.deps.request_store.clone(),
            self.deps.read_context.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn get_creator_dashboard(&self) -> GetCreatorDashboard {
        GetCreatorDashboard::new(
            self.deps.factory.clone(),
            self.deps.contract.clone(),
            self.deps.request_store.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn submit_campaign_request(&self) -> SubmitCampaignRequest {
        SubmitCampaignRequest::new(
            self.deps.image_host.clone(),
            self.deps.request_store.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn list_pending_requests(&self) -> ListPendingRequests {
        ListPendingRequests::new(
            self.deps.request_store.clone(),
            self.deps.admins.clone(),
            self.deps.tunables.pending_page_size,
        )
    }

    pub fn approve_campaign_request(&self) -> ApproveCampaignRequest {
        ApproveCampaignRequest::new(
            self.deps.factory.clone(),
            self.deps.request_store.clone(),
            self.deps.clock.clone(),
            self.deps.admins.clone(),
            self.deps.tunables.creation_window_secs,
        )
    }

    pub fn reject_campaign_request(&self) -> RejectCampaignRequest {
        RejectCampaignRequest::new(self.deps.request_store.clone(), self.deps.admins.clone())
    }

    pub fn donate(&self) -> Donate {
        Donate::new(self.deps.contract.clone(), self.deps.wallet.clone())
    }

    pub fn withdraw(&self) -> Withdraw {
        Withdraw::new(
            self.deps.contract.clone(),
            self.deps.wallet.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn refund(&self) -> Refund {
        Refund::new(self.deps.contract.clone())
    }

    pub fn get_listing_preferences(&self) -> GetListingPreferences {
        GetListingPreferences::new(self.deps.settings.clone())
    }

    pub fn update_listing_preferences(&self) -> UpdateListingPreferences {
        UpdateListingPreferences::new(self.deps.settings.clone())
    }
}
