//! Filter to remove entries carrying any excluded tag.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Removes entries that share at least one tag with `excluded_tags`.
pub struct ExcludedTagsFilter;

impl Filter for ExcludedTagsFilter {
    fn name(&self) -> &str {
        "ExcludedTagsFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        !entry
            .tags
            .iter()
            .any(|tag| preferences.excluded_tags.contains(tag))
    }

    fn apply(
        &self,
        entries: Vec<CatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<CatalogEntry> {
        if preferences.excluded_tags.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|entry| self.keep(entry, preferences))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_tags_filter() {
        let prefs = UserPreferences::new(100.0).with_excluded_tags(["horror", "online-pvp"]);
        let entries = vec![
            CatalogEntry::new(1, "Cosy").with_tags(["singleplayer", "relaxing"]),
            CatalogEntry::new(2, "Scary").with_tags(["singleplayer", "horror"]),
            CatalogEntry::new(3, "Arena").with_tags(["online-pvp"]),
            CatalogEntry::new(4, "Untagged"),
        ];

        let filtered = ExcludedTagsFilter.apply(entries, &prefs);

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
