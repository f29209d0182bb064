use egui::{RichText, Stroke, vec2};
use nova_games_catalog::Category;

use crate::theme;

/// Render the wrapped row of category toggles.
///
/// Returns the category whose chip was clicked this frame, if any.
pub fn show(ui: &mut egui::Ui, categories: &[Category], selected: &Category) -> Option<Category> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(theme::SPACING_SM, theme::SPACING_SM);
        for category in categories {
            let is_selected = category == selected;
            let (fill, text, stroke) = if is_selected {
                (theme::NEON, egui::Color32::BLACK, Stroke::new(1.0, theme::NEON))
            } else {
                (theme::BG_CARD, theme::TEXT_MUTED, theme::border_stroke())
            };

            let chip = egui::Button::new(RichText::new(category.label()).color(text).strong())
                .fill(fill)
                .stroke(stroke)
                .rounding(theme::RADIUS_SM)
                .min_size(vec2(0.0, 34.0));

            if ui.add(chip).clicked() && !is_selected {
                clicked = Some(category.clone());
            }
        }
    });

    clicked
}
