//! The view state machine: browsing vs. playing, fullscreen on/off.
//!
//! All mutation goes through [`ViewState::apply`], which returns the side
//! effects the presentation layer must perform. The state itself never
//! touches the window.

use nova_games_catalog::{Category, GameRecord};

/// User intents that change the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearchQuery(String),
    SetCategory(Category),
    SelectGame(GameRecord),
    ClosePlayer,
    ToggleFullscreen,
    /// Leave fullscreen but keep playing (the close button on the frame).
    ExitFullscreen,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Reset the main scroll area to the top.
    ScrollToTop,
    /// Put the OS window in or out of fullscreen.
    WindowFullscreen(bool),
}

/// Top-level UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Browsing,
    Playing(&'a GameRecord),
}

impl Mode<'_> {
    pub fn is_playing(&self) -> bool {
        matches!(self, Mode::Playing(_))
    }
}

/// Process-local UI state. Starts browsing with no filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    selected_category: Category,
    selected_game: Option<GameRecord>,
    /// Only ever true while `selected_game` is set.
    is_fullscreen: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &Category {
        &self.selected_category
    }

    pub fn selected_game(&self) -> Option<&GameRecord> {
        self.selected_game.as_ref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn mode(&self) -> Mode<'_> {
        match &self.selected_game {
            Some(game) => Mode::Playing(game),
            None => Mode::Browsing,
        }
    }

    /// Apply one action and return the effects to perform, in order.
    pub fn apply(&mut self, action: Action) -> Vec<ViewEffect> {
        let mut effects = Vec::new();
        match action {
            Action::SetSearchQuery(query) => {
                self.search_query = query;
            }
            Action::SetCategory(category) => {
                log::debug!("Category -> {}", category);
                self.selected_category = category;
            }
            Action::SelectGame(game) => {
                log::debug!("Playing {} ({})", game.title, game.id);
                self.leave_fullscreen(&mut effects);
                self.selected_game = Some(game);
                effects.push(ViewEffect::ScrollToTop);
            }
            Action::ClosePlayer => {
                if let Some(game) = self.selected_game.take() {
                    log::debug!("Closed {}", game.id);
                }
                self.leave_fullscreen(&mut effects);
            }
            Action::ToggleFullscreen => {
                if self.selected_game.is_some() {
                    self.is_fullscreen = !self.is_fullscreen;
                    effects.push(ViewEffect::WindowFullscreen(self.is_fullscreen));
                }
            }
            Action::ExitFullscreen => {
                self.leave_fullscreen(&mut effects);
            }
        }
        effects
    }

    fn leave_fullscreen(&mut self, effects: &mut Vec<ViewEffect>) {
        if self.is_fullscreen {
            self.is_fullscreen = false;
            effects.push(ViewEffect::WindowFullscreen(false));
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> Vec<ViewEffect> {
        self.apply(Action::SetSearchQuery(query.into()))
    }

    pub fn set_category(&mut self, category: Category) -> Vec<ViewEffect> {
        self.apply(Action::SetCategory(category))
    }

    pub fn select_game(&mut self, game: &GameRecord) -> Vec<ViewEffect> {
        self.apply(Action::SelectGame(game.clone()))
    }

    pub fn close_player(&mut self) -> Vec<ViewEffect> {
        self.apply(Action::ClosePlayer)
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<ViewEffect> {
        self.apply(Action::ToggleFullscreen)
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
