//! Catalog loading from JSON or YAML files and from the built-in data.
//!
//! A catalog file holds a single top-level list of records:
//! ```text
//! [
//!   { "id": "2048", "title": "2048", "thumbnail": "...",
//!     "category": "Puzzle", "iframeUrl": "..." },
//!   ...
//! ]
//! ```
//! YAML catalogs use the same shape as a sequence.

use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Catalog, GameRecord};

/// The catalog compiled into the binaries.
const BUILTIN_CATALOG: &str = include_str!("../data/games.json");

/// Label used in error messages for the compiled-in catalog.
const BUILTIN_LABEL: &str = "<built-in catalog>";

/// Supported on-disk catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }
}

/// Load and validate the catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_records(builtin_records()?)
}

/// The records of the built-in catalog, not yet validated.
pub fn builtin_records() -> Result<Vec<GameRecord>, CatalogError> {
    parse_json(BUILTIN_CATALOG, BUILTIN_LABEL)
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let records = load_records(path)?;
    let catalog = Catalog::from_records(records)?;
    log::debug!("Validated {} games from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Read the records of a catalog file without validating them.
///
/// Used by tooling that wants to report every integrity issue instead of
/// stopping at the first invalid catalog.
pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, CatalogError> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.display().to_string()))?;
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let label = path.display().to_string();
    match format {
        CatalogFormat::Json => parse_json(&contents, &label),
        CatalogFormat::Yaml => parse_yaml(&contents, &label),
    }
}

/// Parse a JSON array of records. `label` names the source in errors.
pub fn parse_json(contents: &str, label: &str) -> Result<Vec<GameRecord>, CatalogError> {
    serde_json::from_str(contents).map_err(|e| CatalogError::Json {
        path: label.to_string(),
        source: e,
    })
}

/// Parse a YAML sequence of records. `label` names the source in errors.
pub fn parse_yaml(contents: &str, label: &str) -> Result<Vec<GameRecord>, CatalogError> {
    serde_yml::from_str(contents).map_err(|e| CatalogError::Yaml {
        path: label.to_string(),
        source: e,
    })
}
