//! Category derivation and search filtering over a catalog.
//!
//! Both operations are pure and preserve catalog order. They are cheap
//! enough to run on every keystroke for catalogs of a few hundred entries.

use std::collections::HashSet;
use std::fmt;

use crate::types::GameRecord;

/// Label of the catch-all category chip.
pub const ALL_LABEL: &str = "All";

/// The category selection: every game, or the games of one named category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a chip label. `"All"` is the catch-all; anything else is a name.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Whether a game belongs to this category. Names compare exactly.
    pub fn contains(&self, game: &GameRecord) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => game.category == *name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from_label(label)
    }
}

/// `All` followed by each distinct category in order of first appearance.
///
/// A catalog category spelled exactly `"All"` is folded into the leading
/// `All` entry so labels never repeat.
pub fn derive_categories(games: &[GameRecord]) -> Vec<Category> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![Category::All];
    for game in games {
        if game.category == ALL_LABEL {
            continue;
        }
        if seen.insert(game.category.as_str()) {
            categories.push(Category::Named(game.category.clone()));
        }
    }
    categories
}

/// The search-and-category predicate.
///
/// Holds the query already lowercased so repeated matching does not
/// re-lowercase it per game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameFilter {
    query: String,
    category: Category,
}

impl GameFilter {
    pub fn new(query: &str, category: Category) -> Self {
        Self {
            query: query.to_lowercase(),
            category,
        }
    }

    /// True when the filter lets every game through.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    pub fn matches(&self, game: &GameRecord) -> bool {
        let title_matches =
            self.query.is_empty() || game.title.to_lowercase().contains(&self.query);
        title_matches && self.category.contains(game)
    }
}

/// Games whose title contains `query` (case-insensitive) and that belong to
/// `category`, in catalog order.
pub fn filter_games<'a>(
    games: &'a [GameRecord],
    query: &str,
    category: &Category,
) -> Vec<&'a GameRecord> {
    let filter = GameFilter::new(query, category.clone());
    games.iter().filter(|g| filter.matches(g)).collect()
}
