//! Data model types for the game catalog.
//!
//! A catalog is an ordered, read-only list of [`GameRecord`]s. Order is
//! significant: it is the display order of the browsing grid and the order
//! in which categories are discovered.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::validate::validate;

// ── Game record ─────────────────────────────────────────────────────────────

/// One playable entry of the catalog.
///
/// Field names on the wire are camelCase (`iframeUrl`); YAML catalogs may use
/// `iframe_url` as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    pub title: String,
    /// URL of the preview image.
    pub thumbnail: String,
    pub category: String,
    /// URL of the embeddable game document.
    #[serde(alias = "iframe_url")]
    pub iframe_url: String,
}

impl GameRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        category: impl Into<String>,
        iframe_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: thumbnail.into(),
            category: category.into(),
            iframe_url: iframe_url.into(),
        }
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// A validated, immutable list of games.
///
/// Only shared references to the records are ever handed out, so the catalog
/// stays unchanged for as long as it lives.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting the list if any record is malformed or an id
    /// is repeated.
    pub fn from_records(games: Vec<GameRecord>) -> Result<Self, CatalogError> {
        let issues = validate(&games);
        if !issues.is_empty() {
            return Err(CatalogError::Invalid(issues));
        }
        Ok(Self { games })
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// The first entry, used as the featured game.
    pub fn first(&self) -> Option<&GameRecord> {
        self.games.first()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.games.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}
