use egui::{CursorIcon, RichText, Sense, Stroke, vec2};
use nova_games_catalog::GameRecord;

use crate::theme;

/// Height of the title and category lines under the thumbnail.
const CAPTION_HEIGHT: f32 = 40.0;

/// Draw one clickable game tile `width` points wide.
///
/// The thumbnail keeps a 4:3 frame; the returned response reports clicks on
/// any part of the tile.
pub fn show(ui: &mut egui::Ui, game: &GameRecord, width: f32) -> egui::Response {
    let image_size = vec2(width, width * 3.0 / 4.0);

    let inner = ui.allocate_ui(vec2(width, image_size.y + CAPTION_HEIGHT), |ui| {
        ui.set_width(width);
        ui.spacing_mut().item_spacing.y = 4.0;

        let image = ui.add(
            egui::Image::from_uri(game.thumbnail.as_str())
                .fit_to_exact_size(image_size)
                .maintain_aspect_ratio(false)
                .rounding(theme::RADIUS_MD)
                .show_loading_spinner(true),
        );
        ui.add_space(4.0);
        ui.add(egui::Label::new(RichText::new(&game.title).strong()).truncate());
        ui.label(
            RichText::new(&game.category)
                .small()
                .color(theme::TEXT_DIM),
        );
        image.rect
    });

    let image_rect = inner.inner;
    let response = inner
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    let outline = if response.hovered() {
        Stroke::new(2.0, theme::NEON)
    } else {
        theme::border_stroke()
    };
    ui.painter()
        .rect_stroke(image_rect, theme::RADIUS_MD, outline);

    if response.hovered() {
        ui.painter().text(
            image_rect.left_bottom() + vec2(12.0, -12.0),
            egui::Align2::LEFT_BOTTOM,
            "PLAY NOW",
            egui::FontId::proportional(12.0),
            theme::NEON,
        );
    }

    response
}
