//! Filter capping expected playtime.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Removes entries whose expected duration exceeds `max_duration`.
pub struct MaxDurationFilter;

impl Filter for MaxDurationFilter {
    fn name(&self) -> &str {
        "MaxDurationFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        entry.playtime <= preferences.max_duration
    }
}
