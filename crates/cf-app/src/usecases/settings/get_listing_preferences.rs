//! Use case for reading the persisted listing preferences

use std::sync::Arc;

use anyhow::Result;
use cf_core::ports::SettingsPort;
use cf_core::settings::ListingPreferences;
use tracing::{info, info_span, Instrument};

pub struct GetListingPreferences {
    settings: Arc<dyn SettingsPort>,
}

impl GetListingPreferences {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<ListingPreferences> {
        let span = info_span!("usecase.get_listing_preferences.execute");

        async {
            let settings = self.settings.load().await?;
            info!(
                prioritize_flagged = settings.listing.prioritize_flagged,
                "Listing preferences retrieved"
            );
            Ok(settings.listing)
        }
        .instrument(span)
        .await
    }
}
