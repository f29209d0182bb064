//! Game catalog data model, loading, validation and filtering.
//!
//! This crate is the read-only side of nova-games: it turns a catalog file
//! (or the built-in list) into a validated [`Catalog`] and answers the two
//! derived questions the UI asks of it, which categories exist and which
//! games match the current search.

pub mod error;
pub mod filter;
pub mod load;
pub mod types;
pub mod validate;

pub use error::{CatalogError, CatalogIssue, RecordField};
pub use filter::{ALL_LABEL, Category, GameFilter, derive_categories, filter_games};
pub use load::{
    CatalogFormat, builtin_catalog, builtin_records, load_catalog, load_records, parse_json,
    parse_yaml,
};
pub use types::{Catalog, GameRecord};
pub use validate::validate;
