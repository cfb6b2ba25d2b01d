//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, plus the standard pipeline used
//! by the recommender.

use crate::filters::*;
use crate::traits::Filter;
use catalog::{CatalogEntry, UserPreferences};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ReliabilityFloorFilter)
///     .add_filter(CategoryPreferenceFilter)
///     .add_filter(MaxDurationFilter);
///
/// let filtered = pipeline.apply(entries, &preferences);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full filter stage: every constraint a request can carry.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(ReliabilityFloorFilter)
            .add_filter(CategoryPreferenceFilter)
            .add_filter(PlatformFilter)
            .add_filter(MinimumCriticScoreFilter)
            .add_filter(ScoreBandFilter)
            .add_filter(MaxDurationFilter)
            .add_filter(ExcludedTagsFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the entries.
    ///
    /// Stops early once nothing is left to filter.
    pub fn apply(
        &self,
        entries: Vec<CatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<CatalogEntry> {
        let mut current = entries;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, preferences);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// True if a single entry passes every filter.
    pub fn accepts(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool {
        self.filters.iter().all(|f| f.keep(entry, preferences))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the standard filter stage over `candidates`, preserving order.
pub fn filter_entries(candidates: &[CatalogEntry], preferences: &UserPreferences) -> Vec<CatalogEntry> {
    FilterPipeline::standard().apply(candidates.to_vec(), preferences)
}
