pub mod defaults;
pub mod model;

pub use model::{ListingPreferences, Settings, CURRENT_SCHEMA_VERSION};
