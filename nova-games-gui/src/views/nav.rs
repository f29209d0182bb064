use egui::{Align, Layout, RichText, Sense, vec2};
use nova_games_lib::Action;

use crate::theme;

/// Render the top bar: brand on the left, search box on the right.
///
/// `search_text` is the text edit's buffer; it is pushed to the store as
/// [`Action::SetSearchQuery`] on every edit.
pub fn show(ui: &mut egui::Ui, search_text: &mut String, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let brand = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(RichText::new("NOVA").size(24.0).strong());
                ui.label(
                    RichText::new("GAMES")
                        .size(24.0)
                        .strong()
                        .color(theme::NEON),
                );
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if brand.clicked() {
            actions.push(Action::ClosePlayer);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let width = ui.available_width().min(320.0);
            let search = egui::TextEdit::singleline(search_text)
                .hint_text("Search unblocked games...")
                .desired_width(width)
                .margin(vec2(12.0, 8.0));
            if ui.add(search).changed() {
                actions.push(Action::SetSearchQuery(search_text.clone()));
            }
            ui.label(RichText::new("🔍").color(theme::TEXT_DIM));
        });
    });
}
