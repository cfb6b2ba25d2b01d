//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that every catalog constraint
//! implements so the pipeline can apply them in sequence.

use catalog::{CatalogEntry, UserPreferences};

/// One constraint of the filter stage.
///
/// A filter keeps the entries that satisfy its constraint and must
/// preserve their relative order. Applying filters one after another
/// therefore yields the AND of all constraints.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// True if `entry` satisfies this constraint under `preferences`.
    fn keep(&self, entry: &CatalogEntry, preferences: &UserPreferences) -> bool;

    /// Apply this filter to a set of entries.
    ///
    /// Filters that are inactive for the given preferences may override
    /// this to skip the per-entry pass.
    fn apply(
        &self,
        entries: Vec<CatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<CatalogEntry> {
        entries
            .into_iter()
            .filter(|entry| self.keep(entry, preferences))
            .collect()
    }
}
