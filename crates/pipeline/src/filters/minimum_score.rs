//! Filter enforcing the user's preferred minimum critic score.
//!
//! Entries without a critic score are unknown, not failing, and pass.

use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Removes reviewed entries scoring below `preferred_min_score`.
pub struct MinimumCriticScoreFilter;

impl Filter for MinimumCriticScoreFilter {
    fn name(&self) -> &str {
        "MinimumCriticScoreFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        match (preferences.preferred_min_score, entry.metacritic) {
            (Some(min_score), Some(score)) => score >= min_score,
            _ => true,
        }
    }

    fn apply(
        &self,
        entries: Vec<CatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<CatalogEntry> {
        if preferences.preferred_min_score.is_none() {
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

    fn create_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(1, "Acclaimed").with_metacritic(Some(90)),
            CatalogEntry::new(2, "Borderline").with_metacritic(Some(70)),
            CatalogEntry::new(3, "Panned").with_metacritic(Some(45)),
            CatalogEntry::new(4, "Unreviewed").with_metacritic(None),
        ]
    }

    #[test]
    fn test_minimum_score_filter() {
        let prefs = UserPreferences::new(100.0).with_min_score(Some(70));

        let filtered = MinimumCriticScoreFilter.apply(create_entries(), &prefs);

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_no_minimum_keeps_everything() {
        let prefs = UserPreferences::new(100.0);
        let filtered = MinimumCriticScoreFilter.apply(create_entries(), &prefs);
        assert_eq!(filtered.len(), 4);
    }
}
