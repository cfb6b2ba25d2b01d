//! Similarity ranking against a reference entry.
//!
//! ## Algorithm
//! similarity = 0.4 * category Jaccard
//!            + 0.3 * platform Jaccard
//!            + 0.3 * rating closeness
//!
//! Each component lies in [0, 1], so the sum does too.

use crate::ranking::{ScoredEntry, rank_by_score};
use catalog::{CatalogEntry, MAX_RATING};
use rayon::prelude::*;
use std::collections::HashSet;

pub const CATEGORY_WEIGHT: f32 = 0.4;
pub const PLATFORM_WEIGHT: f32 = 0.3;
pub const RATING_WEIGHT: f32 = 0.3;

/// Jaccard similarity = |intersection| / |union|.
///
/// Two empty sets have an empty union; that case scores 0.0.
pub fn jaccard(a: &[String], b: &[String]) -> f32 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = a.intersection(&b).count() as f32;
    let union = a.union(&b).count() as f32;
    if union == 0.0 {
        0.0
    } else {
        intersection / union
    }
}

/// Linear decay over the rating scale, floored at 0.
pub fn rating_similarity(a: f32, b: f32) -> f32 {
    (1.0 - (a - b).abs() / MAX_RATING).max(0.0)
}

/// Weighted similarity of two entries, in [0, 1].
pub fn similarity_score(reference: &CatalogEntry, other: &CatalogEntry) -> f32 {
    CATEGORY_WEIGHT * jaccard(&reference.categories, &other.categories)
        + PLATFORM_WEIGHT * jaccard(&reference.platforms, &other.platforms)
        + RATING_WEIGHT * rating_similarity(reference.rating, other.rating)
}

/// The `limit` candidates most similar to `reference`, with scores.
///
/// Candidates sharing the reference's id are never returned.
pub fn rank_similar(
    reference: &CatalogEntry,
    candidates: &[CatalogEntry],
    limit: usize,
) -> Vec<ScoredEntry> {
    if limit == 0 {
        return Vec::new();
    }

    let pool: Vec<CatalogEntry> = candidates
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .cloned()
        .collect();

    let scores: Vec<f32> = pool
        .par_iter()
        .map(|candidate| similarity_score(reference, candidate))
        .collect();

    rank_by_score(pool, scores, limit)
}

/// The `limit` candidates most similar to `reference`, best first.
pub fn find_similar_entries(
    reference: &CatalogEntry,
    candidates: &[CatalogEntry],
    limit: usize,
) -> Vec<CatalogEntry> {
    rank_similar(reference, candidates, limit)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_jaccard() {
        assert_close(jaccard(&strings(&["a", "b"]), &strings(&["b", "c"])), 1.0 / 3.0);
        assert_close(jaccard(&strings(&["a"]), &strings(&["a"])), 1.0);
        assert_close(jaccard(&strings(&["a"]), &strings(&[])), 0.0);
        assert_close(jaccard(&strings(&[]), &strings(&[])), 0.0);
        // Duplicates collapse to set semantics
        assert_close(jaccard(&strings(&["a", "a"]), &strings(&["a"])), 1.0);
    }

    #[test]
    fn test_rating_similarity() {
        assert_close(rating_similarity(4.0, 4.0), 1.0);
        assert_close(rating_similarity(5.0, 0.0), 0.0);
        assert_close(rating_similarity(1.5, 4.0), 0.5);
    }

    #[test]
    fn test_similarity_weights() {
        let reference = CatalogEntry::new(1, "Ref")
            .with_categories(["action", "rpg"])
            .with_platforms(["playstation5"])
            .with_rating(4.0, 100);
        let twin = CatalogEntry::new(2, "Twin")
            .with_categories(["rpg", "action"])
            .with_platforms(["playstation5"])
            .with_rating(4.0, 100);
        let half = CatalogEntry::new(3, "Half")
            .with_categories(["rpg"])
            .with_platforms(["pc"])
            .with_rating(1.5, 100);

        assert_close(similarity_score(&reference, &twin), 1.0);
        // 0.4 * 0.5 + 0.3 * 0 + 0.3 * 0.5
        assert_close(similarity_score(&reference, &half), 0.35);
    }

    #[test]
    fn test_reference_never_returned() {
        let reference = CatalogEntry::new(7, "Ref").with_categories(["action"]);
        let candidates = vec![
            reference.clone(),
            CatalogEntry::new(8, "Other").with_categories(["action"]),
            CatalogEntry::new(7, "Same id, different data"),
        ];

        let similar = find_similar_entries(&reference, &candidates, 10);
        let ids: Vec<_> = similar.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![8]);
    }

    #[test]
    fn test_ranked_best_first_and_truncated() {
        let reference = CatalogEntry::new(1, "Ref")
            .with_categories(["action"])
            .with_platforms(["playstation5"])
            .with_rating(4.0, 100);
        let candidates = vec![
            CatalogEntry::new(2, "Far").with_rating(0.0, 100),
            CatalogEntry::new(3, "Close")
                .with_categories(["action"])
                .with_platforms(["playstation5"])
                .with_rating(4.0, 100),
            CatalogEntry::new(4, "Middle")
                .with_categories(["action"])
                .with_rating(3.0, 100),
        ];

        let ranked = rank_similar(&reference, &candidates, 2);
        let ids: Vec<_> = ranked.iter().map(|s| s.entry.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(ranked[0].score >= ranked[1].score);
        assert!(find_similar_entries(&reference, &candidates, 0).is_empty());
    }
}
