//! Parser for JSON catalog documents.
//!
//! Two shapes are accepted:
//! - a bare array of entries: `[{"id": 1, "name": "..."}, ...]`
//! - a catalog-API page: `{"count": 2, "results": [...]}`

use crate::error::{CatalogError, Result};
use crate::types::CatalogEntry;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Entries(Vec<CatalogEntry>),
    Page { results: Vec<CatalogEntry> },
}

/// Read and parse a catalog file.
pub fn parse_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    parse_catalog_str(&content, &path.display().to_string())
}

/// Parse catalog JSON from memory. `file` is only used in error messages.
pub fn parse_catalog_str(content: &str, file: &str) -> Result<Vec<CatalogEntry>> {
    let document: CatalogDocument =
        serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
            file: file.to_string(),
            source,
        })?;

    Ok(match document {
        CatalogDocument::Entries(entries) => entries,
        CatalogDocument::Page { results } => results,
    })
}
