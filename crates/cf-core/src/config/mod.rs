//! # Pure Data Module - Data Transfer Objects Only
//!
//! Defines the configuration structure and its TOML mapping. Holds data
//! only: no validation, no default value calculation. Missing keys map to
//! empty values; the bootstrap layer decides what an empty value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Chain name as written in the file (may be empty).
    pub chain: String,

    /// Administrator wallet addresses.
    pub admin_addresses: Vec<String>,

    /// Request store database path (path info only, no existence check).
    pub database_path: PathBuf,

    /// User settings file path.
    pub settings_path: PathBuf,

    /// Image upload endpoint.
    pub image_upload_url: String,

    /// Unsigned upload preset sent with every image.
    pub image_upload_preset: String,

    /// Campaign list page size.
    pub page_size: u64,

    /// Items added per incremental reveal.
    pub reveal_step: u64,

    /// Admin pending-queue page size.
    pub pending_page_size: u64,

    /// Slack around the approval time when matching deployments.
    pub creation_window_secs: u64,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Must NOT contain any validation or default value logic. Empty values
    /// are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int_at = |section: &str, key: &str| -> u64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0)
        };

        Ok(Self {
            chain: str_at("network", "chain"),
            admin_addresses: toml_value
                .get("admin")
                .and_then(|a| a.get("addresses"))
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            database_path: PathBuf::from(str_at("storage", "database_path")),
            settings_path: PathBuf::from(str_at("storage", "settings_path")),
            image_upload_url: str_at("image_host", "upload_url"),
            image_upload_preset: str_at("image_host", "upload_preset"),
            page_size: int_at("listing", "page_size"),
            reveal_step: int_at("listing", "reveal_step"),
            pending_page_size: int_at("listing", "pending_page_size"),
            creation_window_secs: int_at("linkage", "creation_window_secs"),
        })
    }

    /// Create empty AppConfig (all empty/default values).
    pub fn empty() -> Self {
        Self {
            chain: String::new(),
            admin_addresses: Vec::new(),
            database_path: PathBuf::new(),
            settings_path: PathBuf::new(),
            image_upload_url: String::new(),
            image_upload_preset: String::new(),
            page_size: 0,
            reveal_step: 0,
            pending_page_size: 0,
            creation_window_secs: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [network]
            chain = "sepolia"

            [admin]
            addresses = ["0xAA", "0xBB"]

            [storage]
            database_path = "/data/requests.db"
            settings_path = "/data/settings.json"

            [image_host]
            upload_url = "https://api.example.com/upload"
            upload_preset = "unsigned"

            [listing]
            page_size = 9
            reveal_step = 6
            pending_page_size = 5

            [linkage]
            creation_window_secs = 300
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.chain, "sepolia");
        assert_eq!(config.admin_addresses, vec!["0xAA", "0xBB"]);
        assert_eq!(config.database_path, PathBuf::from("/data/requests.db"));
        assert_eq!(config.settings_path, PathBuf::from("/data/settings.json"));
        assert_eq!(config.image_upload_url, "https://api.example.com/upload");
        assert_eq!(config.image_upload_preset, "unsigned");
        assert_eq!(config.page_size, 9);
        assert_eq!(config.reveal_step, 6);
        assert_eq!(config.pending_page_size, 5);
        assert_eq!(config.creation_window_secs, 300);
    }

    #[test]
    fn missing_keys_are_empty_facts() {
        let value: toml::Value = toml::from_str("[network]\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }
}
