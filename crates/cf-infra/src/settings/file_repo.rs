use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use cf_core::ports::SettingsPort;
use cf_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

use crate::settings::migration::SettingsMigrator;

/// User preferences stored as pretty-printed JSON.
///
/// Writes go through a temp file and a rename, so a crash
/// mid-save leaves either the previous file or the new one on disk.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Repository backed by the file at `path`. Nothing is touched on disk
    /// until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Create the directory holding the settings file, including missing
    /// ancestors. A bare file name needs no directory.
    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    ///
    /// The temp file lives next to the target (`settings.json.tmp`) so the
    /// rename stays on one filesystem. On error the target is unchanged and
    /// the temp file may be left behind for the next save to overwrite.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

/// File-backed [`SettingsPort`].
///
/// A missing file is not an error, it means defaults. A file that cannot be
/// parsed is an error, never silently replaced.
#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Missing file yields defaults. Older schemas are migrated and written back.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        let original_version = settings.schema_version;
        let migrated = SettingsMigrator::new().migrate_to_latest(settings)?;

        if original_version < CURRENT_SCHEMA_VERSION {
            info!(
                from = original_version,
                to = CURRENT_SCHEMA_VERSION,
                "settings migrated"
            );
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    /// Serialize as pretty JSON and replace the file atomically.
    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested/settings.json"));
        let mut settings = Settings::default();
        settings.listing.prioritize_flagged = true;

        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
        assert!(!dir.path().join("nested/settings.json.tmp").exists());
    }

    #[tokio::test]
    async fn version_zero_file_is_rewritten_with_current_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"schema_version":0,"listing":{"prioritize_flagged":true}}"#,
        )
        .unwrap();
        let repo = FileSettingsRepository::new(&path);

        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(loaded.listing.prioritize_flagged);
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains(&format!("\"schema_version\": {CURRENT_SCHEMA_VERSION}")));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(FileSettingsRepository::new(&path).load().await.is_err());
    }
}
