//! Filter-then-rank entry point for recommendations.

use crate::filter_pipeline::FilterPipeline;
use crate::scoring::score_entries;
use catalog::{CatalogEntry, UserPreferences};
use std::cmp::Ordering;

/// An entry paired with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub entry: CatalogEntry,
    pub score: f32,
}

/// Sort `entries` by descending score and keep the first `limit`.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_by_score(entries: Vec<CatalogEntry>, scores: Vec<f32>, limit: usize) -> Vec<ScoredEntry> {
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredEntry> = entries
        .into_iter()
        .zip(scores)
        .map(|(entry, score)| ScoredEntry { entry, score })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

/// Filter, score and rank `candidates`, keeping scores.
pub fn rank_recommendations(
    candidates: &[CatalogEntry],
    preferences: &UserPreferences,
    limit: usize,
) -> Vec<ScoredEntry> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let filtered = FilterPipeline::standard().apply(candidates.to_vec(), preferences);
    tracing::debug!(
        "Filter stage kept {} of {} candidates",
        filtered.len(),
        candidates.len()
    );

    let scores = score_entries(&filtered, preferences);
    rank_by_score(filtered, scores, limit)
}

/// Up to `limit` entries satisfying every preference, best first.
pub fn generate_recommendations(
    candidates: &[CatalogEntry],
    preferences: &UserPreferences,
    limit: usize,
) -> Vec<CatalogEntry> {
    rank_recommendations(candidates, preferences, limit)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}
