use egui::{Margin, ViewportCommand};
use nova_games_lib::{Action, Browser, Mode, Settings, ViewEffect};

use crate::theme;
use crate::transition::ViewTransition;
use crate::views;

/// Points the entering view slides up by at the start of a transition.
const SLIDE_DISTANCE: f32 = 12.0;

/// Main application state.
pub struct NovaGamesApp {
    /// Catalog plus view state; the only place UI state is mutated.
    browser: Browser,

    /// Backing buffer for the search box.
    search_text: String,

    /// Entrance animation for the browsing/player views.
    transition: ViewTransition,

    /// Set by [`ViewEffect::ScrollToTop`], consumed by the next scroll area.
    scroll_to_top: bool,

    /// Actions emitted by views during the current frame.
    pending: Vec<Action>,
}

impl NovaGamesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, browser: Browser, settings: &Settings) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            search_text: browser.state().search_query().to_string(),
            browser,
            transition: ViewTransition::new(settings.general.animate_transitions),
            scroll_to_top: false,
            pending: Vec::new(),
        }
    }

    /// Apply the actions collected this frame and carry out their effects.
    fn flush_actions(&mut self, ctx: &egui::Context) {
        for action in std::mem::take(&mut self.pending) {
            log::debug!("Action: {:?}", action);
            for effect in self.browser.dispatch(action) {
                self.handle_effect(ctx, effect);
            }
        }
    }

    fn handle_effect(&mut self, ctx: &egui::Context, effect: ViewEffect) {
        match effect {
            ViewEffect::ScrollToTop => self.scroll_to_top = true,
            ViewEffect::WindowFullscreen(on) => {
                ctx.send_viewport_cmd(ViewportCommand::Fullscreen(on));
            }
        }
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let progress = self
            .transition
            .progress(self.browser.mode().is_playing(), now);
        if progress < 1.0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::none()
                    .fill(theme::BG_DARK.gamma_multiply(0.9))
                    .stroke(theme::border_stroke())
                    .inner_margin(Margin::symmetric(theme::SPACING_LG, theme::SPACING_MD)),
            )
            .show(ctx, |ui| {
                views::nav::show(ui, &mut self.search_text, &mut self.pending);
            });

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("content")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            scroll.show(ui, |ui| {
                let available = ui.available_width();
                let side = ((available - theme::CONTENT_MAX_WIDTH) / 2.0).max(theme::SPACING_MD);
                egui::Frame::none()
                    .inner_margin(Margin {
                        left: side,
                        right: side,
                        top: theme::SPACING_LG + SLIDE_DISTANCE * (1.0 - progress),
                        bottom: theme::SPACING_LG,
                    })
                    .show(ui, |ui| {
                        ui.set_width(available - side * 2.0);
                        ui.multiply_opacity(progress);
                        match self.browser.mode() {
                            Mode::Browsing => {
                                views::browse::show(ui, &self.browser, &mut self.pending)
                            }
                            Mode::Playing(game) => {
                                views::player::show(ui, game, &mut self.pending)
                            }
                        }
                    });
            });
        });
    }
}

impl eframe::App for NovaGamesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let fullscreen_game = self
            .browser
            .state()
            .is_fullscreen()
            .then(|| self.browser.state().selected_game())
            .flatten();

        match fullscreen_game {
            Some(game) => views::player::show_fullscreen(ctx, game, &mut self.pending),
            None => self.show_content(ctx),
        }

        self.flush_actions(ctx);
    }
}
