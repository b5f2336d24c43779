//! Use case for persisting the listing preferences

use std::sync::Arc;

use anyhow::Result;
use cf_core::ports::SettingsPort;
use cf_core::settings::{ListingPreferences, CURRENT_SCHEMA_VERSION};
use tracing::{info, info_span, Instrument};

/// Stores the "prioritize flagged campaigns" toggle.
///
/// Loads the full settings document, replaces the listing section and
/// writes it back; other sections are preserved.
pub struct UpdateListingPreferences {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateListingPreferences {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, preferences: ListingPreferences) -> Result<()> {
        let span = info_span!("usecase.update_listing_preferences.execute");

        async {
            let mut settings = self.settings.load().await?;
            if settings.listing == preferences {
                info!("Listing preferences unchanged");
                return Ok(());
            }

            info!(
                old = settings.listing.prioritize_flagged,
                new = preferences.prioritize_flagged,
                "Updating listing preferences"
            );
            settings.schema_version = CURRENT_SCHEMA_VERSION;
            settings.listing = preferences;
            self.settings.save(&settings).await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cf_core::settings::Settings;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySettings {
        stored: Mutex<Settings>,
        saves: Mutex<usize>,
    }

    #[async_trait]
    impl SettingsPort for MemorySettings {
        async fn load(&self) -> Result<Settings> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> Result<()> {
            *self.stored.lock().unwrap() = settings.clone();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn toggle_is_persisted() {
        let port = Arc::new(MemorySettings::default());
        let uc = UpdateListingPreferences::new(port.clone());

        uc.execute(ListingPreferences {
            prioritize_flagged: true,
        })
        .await
        .unwrap();

        assert!(port.stored.lock().unwrap().listing.prioritize_flagged);
        assert_eq!(*port.saves.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn unchanged_preferences_skip_the_write() {
        let port = Arc::new(MemorySettings::default());
        let uc = UpdateListingPreferences::new(port.clone());

        uc.execute(ListingPreferences::default()).await.unwrap();

        assert_eq!(*port.saves.lock().unwrap(), 0);
    }
}
