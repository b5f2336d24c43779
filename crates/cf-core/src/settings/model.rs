use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Preferences of the campaign list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPreferences {
    /// Sort flagged ("emergency") campaigns first.
    #[serde(default)]
    pub prioritize_flagged: bool,
}

/// User preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub listing: ListingPreferences,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
