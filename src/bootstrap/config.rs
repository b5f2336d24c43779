//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read the TOML configuration file
//! - Parse it into the `AppConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! - No validation logic
//! - No default value logic (wiring decides what an empty value means)
//!
//! > **Pure data loading only. Accept whatever is in the file.**

use anyhow::Context;
use cf_core::AppConfig;
use std::path::PathBuf;

/// Load configuration from a TOML file.
///
/// Empty strings, zero page sizes and unknown chain names are all accepted
/// as facts; missing sections map to empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [network]
            chain = "sepolia"

            [admin]
            addresses = ["0xb9Cc3B9D1bd5B3b5fA5D0C1A4aE0c1eE36b4107d"]

            [storage]
            database_path = "/path/to/requests.db"
            settings_path = "/path/to/settings.json"

            [image_host]
            upload_url = "https://api.cloudinary.com/v1_1/demo/image/upload"
            upload_preset = "campaigns"

            [listing]
            page_size = 12
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.chain, "sepolia");
        assert_eq!(config.admin_addresses.len(), 1);
        assert_eq!(config.database_path, PathBuf::from("/path/to/requests.db"));
        assert_eq!(config.settings_path, PathBuf::from("/path/to/settings.json"));
        assert_eq!(config.image_upload_preset, "campaigns");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.reveal_step, 0);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[network]\n[storage]\n").unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[network\nchain = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/crowdfund.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
