//! The catalog browser: one owner for the catalog and the view state.
//!
//! The presentation layer reads from a [`Browser`] and feeds user input back
//! through [`Browser::dispatch`]. Derived data (the category chips and the
//! visible games) is cached here and only recomputed when its inputs change.

use nova_games_catalog::{Catalog, Category, GameFilter, GameRecord, derive_categories};

use crate::view::{Action, Mode, ViewEffect, ViewState};

pub struct Browser {
    catalog: Catalog,
    state: ViewState,
    /// Computed once; the catalog never changes.
    categories: Vec<Category>,
    /// Indices into `catalog` of the games passing the current filter.
    visible: Vec<usize>,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        let categories = derive_categories(catalog.games());
        let mut browser = Self {
            catalog,
            state: ViewState::new(),
            categories,
            visible: Vec::new(),
        };
        browser.refilter();
        browser
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> Mode<'_> {
        self.state.mode()
    }

    /// `All` followed by every catalog category in first-seen order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The game offered by the hero banner.
    pub fn featured(&self) -> Option<&GameRecord> {
        self.catalog.first()
    }

    /// Games passing the current search and category, in catalog order.
    pub fn visible_games(&self) -> impl ExactSizeIterator<Item = &GameRecord> + '_ {
        let games = self.catalog.games();
        self.visible.iter().map(move |&i| &games[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// True when the filters hide every game; the UI shows an empty state.
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Apply an action to the view state.
    ///
    /// A category that is not one of [`categories`](Self::categories) is
    /// replaced by `All`, so the selection always names an existing chip.
    pub fn dispatch(&mut self, action: Action) -> Vec<ViewEffect> {
        let action = match action {
            Action::SetCategory(category) if !self.categories.contains(&category) => {
                log::warn!("Unknown category \"{}\", showing all games", category);
                Action::SetCategory(Category::All)
            }
            other => other,
        };
        let refilter = matches!(
            action,
            Action::SetSearchQuery(_) | Action::SetCategory(_)
        );
        let effects = self.state.apply(action);
        if refilter {
            self.refilter();
        }
        effects
    }

    /// Select a catalog entry by id. Unknown ids change nothing.
    pub fn select_game_by_id(&mut self, id: &str) -> Vec<ViewEffect> {
        let Some(game) = self.catalog.get(id).cloned() else {
            log::warn!("No game with id \"{}\" in the catalog", id);
            return Vec::new();
        };
        self.dispatch(Action::SelectGame(game))
    }

    /// Select the featured game, if the catalog has one.
    pub fn play_featured(&mut self) -> Vec<ViewEffect> {
        match self.featured().cloned() {
            Some(game) => self.dispatch(Action::SelectGame(game)),
            None => Vec::new(),
        }
    }

    fn refilter(&mut self) {
        let filter = GameFilter::new(
            self.state.search_query(),
            self.state.selected_category().clone(),
        );
        self.visible = if filter.is_unfiltered() {
            (0..self.catalog.len()).collect()
        } else {
            self.catalog
                .games()
                .iter()
                .enumerate()
                .filter(|(_, game)| filter.matches(game))
                .map(|(i, _)| i)
                .collect()
        };
        log::debug!(
            "Filter \"{}\" / {} -> {} of {} games",
            self.state.search_query(),
            self.state.selected_category(),
            self.visible.len(),
            self.catalog.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_games_catalog::filter_games;

    fn game(id: &str, title: &str, category: &str) -> GameRecord {
        GameRecord::new(id, title, "thumb", category, "url")
    }

    fn browser() -> Browser {
        let catalog = Catalog::from_records(vec![
            game("a", "Ping Pong", "Sports"),
            game("b", "Pong Master", "Arcade"),
            game("c", "Chess", "Strategy"),
        ])
        .unwrap();
        Browser::new(catalog)
    }

    fn visible_ids(browser: &Browser) -> Vec<&str> {
        browser.visible_games().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let b = browser();
        assert_eq!(visible_ids(&b), vec!["a", "b", "c"]);
        assert_eq!(b.visible_count(), 3);
        let labels: Vec<&str> = b.categories().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "Sports", "Arcade", "Strategy"]);
    }

    #[test]
    fn search_updates_visible_games() {
        let mut b = browser();
        b.dispatch(Action::SetSearchQuery("pong".into()));
        assert_eq!(visible_ids(&b), vec!["a", "b"]);

        b.dispatch(Action::SetSearchQuery("xyz".into()));
        assert!(b.is_empty_result());
    }

    #[test]
    fn category_updates_visible_games() {
        let mut b = browser();
        b.dispatch(Action::SetCategory(Category::from_label("Sports")));
        assert_eq!(visible_ids(&b), vec!["a"]);
    }

    #[test]
    fn cached_list_agrees_with_filter_games() {
        let mut b = browser();
        b.dispatch(Action::SetSearchQuery("o".into()));
        b.dispatch(Action::SetCategory(Category::from_label("Arcade")));
        let expected: Vec<&str> = filter_games(
            b.catalog().games(),
            "o",
            &Category::from_label("Arcade"),
        )
        .iter()
        .map(|g| g.id.as_str())
        .collect();
        assert_eq!(visible_ids(&b), expected);
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let mut b = browser();
        b.dispatch(Action::SetCategory(Category::from_label("Racing")));
        assert_eq!(b.state().selected_category(), &Category::All);
        assert_eq!(b.visible_count(), 3);
    }

    #[test]
    fn select_by_id() {
        let mut b = browser();
        let effects = b.select_game_by_id("c");
        assert_eq!(effects, vec![ViewEffect::ScrollToTop]);
        assert_eq!(
            b.state().selected_game().map(|g| g.title.as_str()),
            Some("Chess")
        );
    }

    #[test]
    fn select_unknown_id_is_ignored() {
        let mut b = browser();
        assert!(b.select_game_by_id("zzz").is_empty());
        assert_eq!(b.mode(), Mode::Browsing);
    }

    #[test]
    fn play_featured_picks_first_entry() {
        let mut b = browser();
        b.play_featured();
        assert_eq!(b.state().selected_game().map(|g| g.id.as_str()), Some("a"));
    }

    #[test]
    fn empty_catalog_has_no_featured_game() {
        let mut b = Browser::new(Catalog::default());
        assert!(b.featured().is_none());
        assert!(b.play_featured().is_empty());
        assert!(b.is_empty_result());
        assert_eq!(b.categories(), &[Category::All]);
    }

    #[test]
    fn selection_survives_filtering() {
        let mut b = browser();
        b.select_game_by_id("c");
        b.dispatch(Action::SetSearchQuery("pong".into()));
        assert!(b.mode().is_playing());
        assert_eq!(b.state().selected_game().map(|g| g.id.as_str()), Some("c"));
    }
}
