//! # Sources Crate
//!
//! Where recommendation candidates come from.
//!
//! The recommender never fetches data itself: it hands a [`CatalogQuery`]
//! to a [`CatalogSource`] and ranks whatever comes back. Fetching,
//! caching and pagination are the source's business.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogQuery, CatalogSource, InMemoryCatalogSource};
//!
//! let source = InMemoryCatalogSource::new(Arc::new(catalog));
//! let candidates = source.fetch(&CatalogQuery::for_preferences(&prefs, Some("playstation5"), 40))?;
//! ```

use anyhow::Result;
use catalog::{CatalogEntry, EntryId};

// Public modules
pub mod query;
pub mod in_memory;

// Re-export commonly used types
pub use query::{CatalogQuery, DEFAULT_PAGE_SIZE};
pub use in_memory::InMemoryCatalogSource;

/// A provider of catalog entries.
///
/// Implementations may block (network, disk); callers on an async
/// runtime should run them on a blocking thread.
pub trait CatalogSource: Send + Sync {
    /// Entries matching `query`, at most `query.page_size` of them.
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<CatalogEntry>>;

    /// A single entry by id, if the source knows it.
    fn fetch_entry(&self, id: EntryId) -> Result<Option<CatalogEntry>>;
}
