use egui::{Align, Color32, Layout, RichText, vec2};
use nova_games_catalog::GameRecord;
use nova_games_lib::Action;

use crate::theme;
use crate::widgets::{game_frame, stats_panel};

/// Below this width the About and Stats panels stack.
const SIDE_BY_SIDE_MIN_WIDTH: f32 = 768.0;

/// Render the player view for `game` inside the scrolling content column.
pub fn show(ui: &mut egui::Ui, game: &GameRecord, actions: &mut Vec<Action>) {
    show_header(ui, game, actions);
    ui.add_space(theme::SPACING_LG - 8.0);

    let width = ui.available_width();
    let size = vec2(width, width * 9.0 / 16.0);
    if game_frame::show(ui, game, size, theme::RADIUS_MD) {
        launch(ui.ctx(), game);
    }
    ui.add_space(theme::SPACING_LG - 8.0);

    if width >= SIDE_BY_SIDE_MIN_WIDTH {
        let gap = theme::SPACING_LG - 8.0;
        let about_width = (width - gap) * 2.0 / 3.0;
        let stats_width = width - gap - about_width;
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            ui.vertical(|ui| {
                ui.set_width(about_width);
                show_about(ui, game);
            });
            ui.vertical(|ui| {
                ui.set_width(stats_width);
                stats_panel::show(ui);
            });
        });
    } else {
        show_about(ui, game);
        ui.add_space(theme::SPACING_MD);
        stats_panel::show(ui);
    }
}

/// Render the frame alone, filling the window, with an overlay close button.
pub fn show_fullscreen(ctx: &egui::Context, game: &GameRecord, actions: &mut Vec<Action>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let size = ui.available_size();
            if game_frame::show(ui, game, size, 0.0) {
                launch(ctx, game);
            }
        });

    egui::Area::new(egui::Id::new("fullscreen_close"))
        .anchor(egui::Align2::RIGHT_TOP, vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let close = egui::Button::new(RichText::new("✕").size(20.0).color(Color32::WHITE))
                .fill(Color32::from_black_alpha(128))
                .rounding(20.0)
                .min_size(vec2(40.0, 40.0));
            if ui.add(close).on_hover_text("Exit fullscreen").clicked() {
                actions.push(Action::ExitFullscreen);
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions.push(Action::ExitFullscreen);
    }
}

fn show_header(ui: &mut egui::Ui, game: &GameRecord, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let close = egui::Button::new(RichText::new("✕").size(22.0))
            .fill(Color32::TRANSPARENT)
            .rounding(theme::RADIUS_SM)
            .min_size(vec2(40.0, 40.0));
        if ui.add(close).on_hover_text("Back to games").clicked() {
            actions.push(Action::ClosePlayer);
        }
        ui.add_space(theme::SPACING_SM);

        ui.vertical(|ui| {
            ui.label(RichText::new(&game.title).size(24.0).strong());
            ui.label(RichText::new(&game.category).color(theme::TEXT_DIM));
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let fullscreen = egui::Button::new(RichText::new("⛶  Fullscreen"))
                .fill(theme::BG_CARD)
                .stroke(theme::border_stroke())
                .rounding(theme::RADIUS_SM)
                .min_size(vec2(0.0, 38.0));
            if ui.add(fullscreen).clicked() {
                actions.push(Action::ToggleFullscreen);
            }
        });
    });
}

fn show_about(ui: &mut egui::Ui, game: &GameRecord) {
    theme::panel_frame(theme::RADIUS_MD, 24.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(format!("ℹ About {}", game.title))
                .size(18.0)
                .strong(),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(RichText::new(about_text(game)).color(theme::TEXT_MUTED));
    });
}

/// The blurb shown under "About".
pub fn about_text(game: &GameRecord) -> String {
    format!(
        "Experience {} unblocked on Nova Games. This {} game is optimized for performance \
         and works directly in your browser without any downloads. Perfect for quick \
         gaming sessions during breaks.",
        game.title,
        game.category.to_lowercase()
    )
}

fn launch(ctx: &egui::Context, game: &GameRecord) {
    log::info!("Launching {} at {}", game.id, game.iframe_url);
    ctx.open_url(egui::OpenUrl::new_tab(&game.iframe_url));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_text_lowercases_category() {
        let game = GameRecord::new("a", "Ping Pong", "t", "Sports", "u");
        let text = about_text(&game);
        assert!(text.starts_with("Experience Ping Pong unblocked"));
        assert!(text.contains("This sports game"));
    }
}
