//! Filter to keep only entries in the user's favorite categories.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Keeps entries sharing at least one category with the user's favorites.
///
/// An empty favorite set means "no restriction".
pub struct CategoryPreferenceFilter;

impl Filter for CategoryPreferenceFilter {
    fn name(&self) -> &str {
        "CategoryPreferenceFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        preferences.favorite_categories.is_empty()
            || entry
                .categories
                .iter()
                .any(|category| preferences.favorite_categories.contains(category))
    }
}
