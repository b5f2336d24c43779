use anyhow::{anyhow, Result};
use cf_core::ports::SettingsMigrationPort;
use cf_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

/// Upgrades files that record `schema_version = 0`; their layout already
/// matches version 1. Files with no `schema_version` at all deserialize at
/// the current version and never reach a migration.
struct MigrationV0ToV1;

impl SettingsMigrationPort for MigrationV0ToV1 {
    fn from_version(&self) -> u32 {
        0
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, mut settings: Settings) -> Settings {
        settings.schema_version = self.to_version();
        settings
    }
}

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(MigrationV0ToV1)],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let current = settings.schema_version;
            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no settings migration from version {}", current))?;

            settings = migration.migrate(settings);
        }

        Ok(settings)
    }
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}
