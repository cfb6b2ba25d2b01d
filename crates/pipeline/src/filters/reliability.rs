//! Fixed reliability floor.
//!
//! Entries backed by too few ratings are never recommended, whatever
//! else the user asked for. The floor is not user-configurable.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Removes entries with `ratings_count < MIN_RATINGS_COUNT`.
pub struct ReliabilityFloorFilter;

impl Filter for ReliabilityFloorFilter {
    fn name(&self) -> &str {
        "ReliabilityFloorFilter"
    }

    fn keep(&self, entry: &CatalogEntry, _preferences: &UserPreferences) -> bool {
        entry.is_reliable()
    }
}
