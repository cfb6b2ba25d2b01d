//! # Catalog Crate
//!
//! Domain types for the game recommender and the JSON catalog loader.
//!
//! ## Main Components
//!
//! - **types**: `CatalogEntry`, `UserPreferences`, `ScoreBand`, `Catalog`
//! - **parser**: Parse catalog JSON (bare array or paged `results`)
//! - **index**: Build and validate a `Catalog`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/catalog.json"))?;
//! let entry = catalog.get_entry(3498).unwrap();
//! println!("{} has {} ratings", entry.name, entry.ratings_count);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{validate_entries, validate_entry};
pub use types::{
    Catalog,
    CatalogEntry,
    EntryId,
    ScoreBand,
    UserPreferences,
    MAX_CRITIC_SCORE,
    MAX_RATING,
    MIN_RATINGS_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get_entry(1).is_none());
    }

    #[test]
    fn test_entry_builder() {
        let entry = CatalogEntry::new(1, "Returnal")
            .with_categories(["shooter", "action"])
            .with_platforms(["playstation5"])
            .with_rating(4.2, 800)
            .with_metacritic(Some(86))
            .with_playtime(20.0);

        assert_eq!(entry.categories.len(), 2);
        assert!(entry.has_category("shooter"));
        assert!(!entry.has_category("rpg"));
        assert_eq!(entry.metacritic, Some(86));
    }
}
