use egui::{Color32, RichText, vec2};
use nova_games_catalog::GameRecord;
use nova_games_lib::{Action, Browser};

use crate::theme;
use crate::widgets::{category_chips, game_tile};

/// Horizontal and vertical gap between tiles.
const TILE_GAP: f32 = 20.0;

/// Render the browsing view: hero, category chips, and the game grid.
pub fn show(ui: &mut egui::Ui, browser: &Browser, actions: &mut Vec<Action>) {
    show_hero(ui, browser.featured(), actions);
    ui.add_space(theme::SPACING_LG);

    if let Some(category) = category_chips::show(
        ui,
        browser.categories(),
        browser.state().selected_category(),
    ) {
        actions.push(Action::SetCategory(category));
    }
    ui.add_space(theme::SPACING_LG);

    if browser.is_empty_result() {
        show_empty_state(ui);
        return;
    }

    let games: Vec<&GameRecord> = browser.visible_games().collect();
    let width = ui.available_width();
    let columns = grid_columns(width);
    let tile_width = (width - TILE_GAP * (columns - 1) as f32) / columns as f32;

    for row in games.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = TILE_GAP;
            for game in row {
                if game_tile::show(ui, game, tile_width).clicked() {
                    actions.push(Action::SelectGame((*game).clone()));
                }
            }
        });
        ui.add_space(TILE_GAP);
    }
}

/// Tiles per row for a given content width, from two on narrow windows up to five.
pub fn grid_columns(width: f32) -> usize {
    match width {
        w if w < 640.0 => 2,
        w if w < 768.0 => 3,
        w if w < 1024.0 => 4,
        _ => 5,
    }
}

fn show_hero(ui: &mut egui::Ui, featured: Option<&GameRecord>, actions: &mut Vec<Action>) {
    theme::panel_frame(theme::RADIUS_LG, 40.0).show(ui, |ui| {
        ui.set_width(ui.available_width());

        egui::Frame::none()
            .fill(theme::NEON_FAINT)
            .stroke(egui::Stroke::new(1.0, theme::NEON.gamma_multiply(0.3)))
            .rounding(20.0)
            .inner_margin(egui::Margin::symmetric(12.0, 4.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("📈 TRENDING NOW")
                        .size(11.0)
                        .strong()
                        .color(theme::NEON),
                );
            });
        ui.add_space(theme::SPACING_LG - 8.0);

        ui.label(RichText::new("UNBLOCKED GAMES").size(48.0).strong());
        ui.label(
            RichText::new("WITHOUT LIMITS.")
                .size(48.0)
                .strong()
                .color(theme::NEON),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(
            RichText::new(
                "Access the best curated collection of unblocked web games. \
                 Fast, free, and always available.",
            )
            .size(17.0)
            .color(theme::TEXT_MUTED),
        );

        if let Some(game) = featured {
            ui.add_space(theme::SPACING_LG);
            let button = egui::Button::new(
                RichText::new(format!("Play Featured: {}", game.title))
                    .size(16.0)
                    .strong()
                    .color(Color32::BLACK),
            )
            .fill(theme::NEON)
            .rounding(theme::RADIUS_SM)
            .min_size(vec2(0.0, 52.0));
            if ui.add(button).clicked() {
                actions.push(Action::SelectGame(game.clone()));
            }
        }
    });
}

fn show_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("▦").size(48.0).color(theme::TEXT_FAINT));
        ui.add_space(theme::SPACING_MD);
        ui.label(
            RichText::new("No games found")
                .size(20.0)
                .strong()
                .color(theme::TEXT_DIM),
        );
        ui.label(
            RichText::new("Try adjusting your search or category filter").color(theme::TEXT_FAINT),
        );
        ui.add_space(80.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_with_width() {
        assert_eq!(grid_columns(320.0), 2);
        assert_eq!(grid_columns(639.9), 2);
        assert_eq!(grid_columns(640.0), 3);
        assert_eq!(grid_columns(800.0), 4);
        assert_eq!(grid_columns(1024.0), 5);
        assert_eq!(grid_columns(4000.0), 5);
    }
}
