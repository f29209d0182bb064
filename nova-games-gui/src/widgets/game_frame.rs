//! The embedded-frame region of the player.
//!
//! A native window cannot host the game's web document inline, so the frame
//! shows the game's artwork and embed address and hands the address to the
//! system browser on request. The document itself stays opaque: only its URL
//! crosses this boundary.

use egui::{Align, Color32, Layout, RichText, Sense, UiBuilder, vec2};
use nova_games_catalog::GameRecord;

use crate::theme;

/// Draw the frame filling `size`. Returns true when "Launch" was clicked.
pub fn show(ui: &mut egui::Ui, game: &GameRecord, size: egui::Vec2, rounding: f32) -> bool {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return false;
    }

    ui.painter().rect_filled(rect, rounding, Color32::BLACK);
    egui::Image::from_uri(game.thumbnail.as_str())
        .fit_to_exact_size(rect.size())
        .maintain_aspect_ratio(false)
        .rounding(rounding)
        .tint(Color32::from_gray(60))
        .paint_at(ui, rect);
    ui.painter()
        .rect_stroke(rect, rounding, theme::border_stroke());

    let mut launch = false;
    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(rect.shrink(theme::SPACING_LG))
            .layout(Layout::top_down(Align::Center)),
    );
    content.add_space((rect.height() / 2.0 - 90.0).max(0.0));
    content.label(
        RichText::new(&game.title)
            .size(28.0)
            .strong()
            .color(theme::TEXT),
    );
    content.add_space(theme::SPACING_SM);
    content.label(
        RichText::new(&game.iframe_url)
            .monospace()
            .color(theme::TEXT_MUTED),
    );
    content.add_space(theme::SPACING_MD);
    let button = egui::Button::new(
        RichText::new("▶  Launch")
            .size(16.0)
            .strong()
            .color(Color32::BLACK),
    )
    .fill(theme::NEON)
    .rounding(theme::RADIUS_SM)
    .min_size(vec2(160.0, 44.0));
    if content.add(button).clicked() {
        launch = true;
    }
    launch
}
