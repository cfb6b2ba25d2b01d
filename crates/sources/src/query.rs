//! Upstream catalog query parameters.

use catalog::{CatalogEntry, UserPreferences};

/// Default number of entries fetched per request.
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// What the recommender asks a catalog source for.
///
/// Mirrors the parameters a catalog API takes: it narrows the pool
/// before the core filter stage runs, it does not replace it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    /// Any-of category slugs; empty means all
    pub categories: Vec<String>,
    /// Single pinned platform slug
    pub platform: Option<String>,
    pub min_score: Option<u8>,
    pub excluded_tags: Vec<String>,
    pub page_size: usize,
}

impl CatalogQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            categories: Vec::new(),
            platform: None,
            min_score: None,
            excluded_tags: Vec::new(),
            page_size,
        }
    }

    /// Build the upstream query for a resolved request.
    pub fn for_preferences(
        preferences: &UserPreferences,
        platform: Option<&str>,
        page_size: usize,
    ) -> Self {
        Self {
            categories: preferences.favorite_categories.clone(),
            platform: platform.map(str::to_string),
            min_score: preferences.preferred_min_score,
            excluded_tags: preferences.excluded_tags.clone(),
            page_size,
        }
    }

    /// True if `entry` would be returned by this query.
    ///
    /// Unreviewed entries are kept under a minimum score, matching the
    /// permissive handling in the filter stage.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let category_ok = self.categories.is_empty()
            || entry.categories.iter().any(|c| self.categories.contains(c));
        let platform_ok = match &self.platform {
            Some(platform) => entry.platforms.contains(platform),
            None => true,
        };
        let score_ok = match (self.min_score, entry.metacritic) {
            (Some(min), Some(score)) => score >= min,
            _ => true,
        };
        let tags_ok = !entry.tags.iter().any(|t| self.excluded_tags.contains(t));

        category_ok && platform_ok && score_ok && tags_ok
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
