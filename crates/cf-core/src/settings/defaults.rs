use super::model::*;

impl Default for ListingPreferences {
    fn default() -> Self {
        Self {
            prioritize_flagged: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            listing: ListingPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_deserialize_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.listing.prioritize_flagged);
    }

    #[test]
    fn listing_preference_is_read() {
        let settings: Settings =
            serde_json::from_str(r#"{"schema_version":1,"listing":{"prioritize_flagged":true}}"#)
                .unwrap();
        assert!(settings.listing.prioritize_flagged);
    }

    #[test]
    fn empty_listing_section_deserializes_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"listing":{}}"#).unwrap();
        assert_eq!(settings.listing, ListingPreferences::default());
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
    }
}
