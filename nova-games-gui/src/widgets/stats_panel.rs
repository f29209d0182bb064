use egui::{Layout, RichText};

use crate::theme;

/// Fixed engagement figures shown beside every game. Presentation-only:
/// nothing measures these.
const PLACEHOLDER_STATS: &[(&str, &str, bool)] = &[
    ("Plays", "1.2M+", false),
    ("Rating", "4.8/5", true),
    ("Updated", "2 days ago", false),
];

pub fn show(ui: &mut egui::Ui) {
    theme::panel_frame(theme::RADIUS_MD, 24.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("📈 Stats").size(18.0).strong());
        ui.add_space(theme::SPACING_MD);

        for (i, (label, value, highlight)) in PLACEHOLDER_STATS.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(*label).color(theme::TEXT_DIM));
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if *highlight { theme::NEON } else { theme::TEXT };
                    ui.label(RichText::new(*value).monospace().color(color));
                });
            });
            if i + 1 < PLACEHOLDER_STATS.len() {
                ui.separator();
            }
        }
    });
}
