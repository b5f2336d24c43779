pub mod get_listing_preferences;
pub mod update_listing_preferences;

pub use get_listing_preferences::GetListingPreferences;
pub use update_listing_preferences::UpdateListingPreferences;
