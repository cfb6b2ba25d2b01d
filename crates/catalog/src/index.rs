//! Catalog building and validation.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and validate a catalog file.
    ///
    /// Steps:
    /// 1. Parse the JSON document
    /// 2. Validate each entry's numeric ranges and id uniqueness
    /// 3. Build the id index
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);
        let entries = parser::parse_catalog(path)?;
        let catalog = Self::from_entries(entries)?;
        info!("Catalog loaded: {} entries", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from already-parsed entries, validating them first.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        validate_entries(&entries)?;

        let mut catalog = Catalog::new();
        for entry in entries {
            catalog.push_entry(entry);
        }
        Ok(catalog)
    }

    /// Case-insensitive substring search on entry names, catalog order.
    pub fn search_by_name(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Validate data integrity
///
/// Check that:
/// - ids are unique
/// - rating is finite and in [0, 5]
/// - metacritic, when present, is <= 100
/// - playtime is finite and non-negative
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
        validate_entry(entry)?;
    }
    Ok(())
}

/// Range checks for a single entry.
pub fn validate_entry(entry: &CatalogEntry) -> Result<()> {
    if !entry.rating.is_finite() || entry.rating < 0.0 || entry.rating > MAX_RATING {
        return Err(invalid(entry.id, "rating", entry.rating));
    }
    if let Some(score) = entry.metacritic {
        if score > MAX_CRITIC_SCORE {
            return Err(invalid(entry.id, "metacritic", score));
        }
    }
    if !entry.playtime.is_finite() || entry.playtime < 0.0 {
        return Err(invalid(entry.id, "playtime", entry.playtime));
    }
    Ok(())
}

fn invalid(id: EntryId, field: &str, value: impl ToString) -> CatalogError {
    CatalogError::InvalidValue {
        id,
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: EntryId) -> CatalogEntry {
        CatalogEntry::new(id, format!("Game {id}")).with_rating(4.0, 50)
    }

    #[test]
    fn test_from_entries_keeps_order() {
        let catalog = Catalog::from_entries(vec![entry(3), entry(1), entry(2)]).unwrap();
        let ids: Vec<_> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(catalog.get_entry(1).is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::from_entries(vec![entry(1), entry(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(validate_entry(&entry(1).with_rating(5.5, 10)).is_err());
        assert!(validate_entry(&entry(1).with_metacritic(Some(101))).is_err());
        assert!(validate_entry(&entry(1).with_playtime(-1.0)).is_err());
        assert!(validate_entry(&entry(1).with_playtime(f32::NAN)).is_err());
        assert!(validate_entry(&entry(1).with_metacritic(Some(100))).is_ok());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new(1, "Ghost of Tsushima"),
            CatalogEntry::new(2, "Ghostwire: Tokyo"),
            CatalogEntry::new(3, "Returnal"),
        ])
        .unwrap();

        let hits = catalog.search_by_name("GHOST");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
    }
}
