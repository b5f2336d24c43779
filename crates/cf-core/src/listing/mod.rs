//! Campaign list projection.

pub mod pipeline;
pub mod state;

pub use pipeline::{
    apply, window_items, ListedCampaign, ListingPage, ListingQuery, StatusFilter, Window,
};
pub use state::ListingState;
