//! Filtering, scoring and similarity ranking for game recommendations.
//!
//! This crate provides:
//! - Filter trait and one implementation per request constraint
//! - FilterPipeline for composing filters
//! - Desirability scoring with tiered boosts
//! - Similarity ranking against a reference entry
//!
//! ## Architecture
//! Recommendations run in two stages:
//! 1. Filters remove entries that fail any constraint (order preserved)
//! 2. Survivors are scored, stably sorted by descending score and truncated
//!
//! Similarity ranking shares the entry model but not the pipeline.
//! Everything here is synchronous and pure: same input, same output.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{find_similar_entries, generate_recommendations};
//!
//! let recs = generate_recommendations(&candidates, &preferences, 10);
//! let similar = find_similar_entries(&recs[0], &candidates, 5);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scoring;
pub mod ranking;
pub mod similarity;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::{FilterPipeline, filter_entries};
pub use scoring::{ScoreBreakdown, score_breakdown, score_entries, score_entry};
pub use ranking::{ScoredEntry, generate_recommendations, rank_by_score, rank_recommendations};
pub use similarity::{find_similar_entries, jaccard, rank_similar, similarity_score};
