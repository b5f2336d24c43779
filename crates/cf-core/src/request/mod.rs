//! Off-chain campaign requests and their review workflow.

pub mod form;
pub mod linkage;
pub mod model;
pub mod state_machine;

pub use form::{
    CampaignRequestForm, ImageUpload, UploadedImages, ValidatedRequestForm,
    DEFAULT_DURATION_DAYS, EMERGENCY_NAME_PREFIX,
};
pub use linkage::{resolve_linkage, CreationWindow, Linkage, DEFAULT_CREATION_WINDOW_SECS};
pub use model::{sort_newest_first, CampaignRequest, CampaignRequestDraft, RequestStatus};
pub use state_machine::{RequestLifecycle, RequestResolution};
