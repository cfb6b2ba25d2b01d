//! Platform membership filter.
//!
//! The deployment pins a single platform at the call site, but the
//! constraint is a general set intersection.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Keeps entries available on at least one of the requested platforms.
pub struct PlatformFilter;

impl Filter for PlatformFilter {
    fn name(&self) -> &str {
        "PlatformFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        preferences.favorite_platforms.is_empty()
            || entry
                .platforms
                .iter()
                .any(|platform| preferences.favorite_platforms.contains(platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_filter_multi_platform() {
        let prefs = UserPreferences::new(100.0).with_platforms(["playstation5", "pc"]);
        let entries = vec![
            CatalogEntry::new(1, "PS5 only").with_platforms(["playstation5"]),
            CatalogEntry::new(2, "Xbox only").with_platforms(["xbox-series-x"]),
            CatalogEntry::new(3, "PC and Xbox").with_platforms(["xbox-series-x", "pc"]),
        ];

        let filtered = PlatformFilter.apply(entries, &prefs);

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
