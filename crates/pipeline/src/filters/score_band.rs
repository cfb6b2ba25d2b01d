//! Filter restricting critic scores to one band.

use crate::traits::Filter;
use catalog::{CatalogEntry, ScoreBand, UserPreferences};

/// Keeps reviewed entries whose critic score lies in the requested band.
///
/// Applied together with, not instead of, the minimum-score filter.
/// Unreviewed entries always pass.
pub struct ScoreBandFilter;

impl Filter for ScoreBandFilter {
    fn name(&self) -> &str {
        "ScoreBandFilter"
    }

    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        match entry.metacritic {
            Some(score) => preferences.score_band.contains(score),
            None => true,
        }
    }

    fn apply(
        &self,
        entries: Vec<CatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<CatalogEntry> {
        if preferences.score_band == ScoreBand::Any {
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
        [Some(30), Some(31), Some(60), Some(61), Some(80), Some(81), None]
            .into_iter()
            .enumerate()
            .map(|(i, score)| {
                CatalogEntry::new(i as u32 + 1, format!("Game {i}")).with_metacritic(score)
            })
            .collect()
    }

    #[test]
    fn test_score_band_filter_closed_bounds() {
        let prefs = UserPreferences::new(100.0).with_score_band(ScoreBand::Good);

        let filtered = ScoreBandFilter.apply(create_entries(), &prefs);

        let scores: Vec<_> = filtered.iter().map(|e| e.metacritic).collect();
        assert_eq!(scores, vec![Some(61), Some(80), None]);
    }

    #[test]
    fn test_any_band_keeps_everything() {
        let prefs = UserPreferences::new(100.0);
        let filtered = ScoreBandFilter.apply(create_entries(), &prefs);
        assert_eq!(filtered.len(), 7);
    }

    #[test]
    fn test_band_and_minimum_apply_together() {
        let prefs = UserPreferences::new(100.0)
            .with_min_score(Some(75))
            .with_score_band(ScoreBand::Good);

        let filtered = crate::FilterPipeline::new()
            .add_filter(crate::filters::MinimumCriticScoreFilter)
            .add_filter(ScoreBandFilter)
            .apply(create_entries(), &prefs);

        let scores: Vec<_> = filtered.iter().map(|e| e.metacritic).collect();
        assert_eq!(scores, vec![Some(80), None]);
    }
}
