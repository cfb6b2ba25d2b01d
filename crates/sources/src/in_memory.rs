//! Catalog source backed by a loaded [`Catalog`].

use crate::query::CatalogQuery;
use crate::CatalogSource;
use anyhow::Result;
use catalog::{Catalog, CatalogEntry, EntryId};
use std::sync::Arc;
use tracing::debug;

/// Serves queries from an in-memory catalog, in catalog order.
#[derive(Clone)]
pub struct InMemoryCatalogSource {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<CatalogEntry>> {
        let page: Vec<CatalogEntry> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| query.matches(entry))
            .take(query.page_size)
            .cloned()
            .collect();

        debug!(
            "In-memory source returned {} of {} entries (page size {})",
            page.len(),
            self.catalog.len(),
            query.page_size
        );
        Ok(page)
    }

    fn fetch_entry(&self, id: EntryId) -> Result<Option<CatalogEntry>> {
        Ok(self.catalog.get_entry(id).cloned())
    }
}
