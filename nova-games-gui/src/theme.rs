//! Colors, spacing and egui visuals for the dark neon look.

use egui::{Color32, Stroke};

pub const BG_DARK: Color32 = Color32::from_rgb(10, 10, 12);
pub const BG_CARD: Color32 = Color32::from_rgb(22, 22, 26);
pub const BORDER: Color32 = Color32::from_rgb(39, 39, 46);
pub const NEON: Color32 = Color32::from_rgb(0, 255, 136);
pub const NEON_FAINT: Color32 = Color32::from_rgba_premultiplied(0, 40, 22, 40);
pub const TEXT: Color32 = Color32::from_rgb(240, 240, 244);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(161, 161, 170);
pub const TEXT_DIM: Color32 = Color32::from_rgb(113, 113, 122);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(63, 63, 70);

pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 32.0;

pub const RADIUS_SM: f32 = 10.0;
pub const RADIUS_MD: f32 = 16.0;
pub const RADIUS_LG: f32 = 24.0;

/// Widest the main content column grows before it is centered.
pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

pub fn border_stroke() -> Stroke {
    Stroke::new(1.0, BORDER)
}

/// Card-style frame used by the hero banner and the player side panels.
pub fn panel_frame(radius: f32, padding: f32) -> egui::Frame {
    egui::Frame::none()
        .fill(BG_CARD)
        .stroke(border_stroke())
        .rounding(radius)
        .inner_margin(egui::Margin::same(padding))
}

/// Install the dark visuals on the context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_CARD;
    visuals.extreme_bg_color = BG_CARD;
    visuals.override_text_color = Some(TEXT);
    visuals.selection.bg_fill = NEON.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, NEON);
    visuals.hyperlink_color = NEON;

    visuals.widgets.inactive.bg_stroke = border_stroke();
    visuals.widgets.inactive.weak_bg_fill = BG_CARD;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, NEON);
    visuals.widgets.hovered.weak_bg_fill = BG_CARD;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, NEON);

    ctx.set_visuals(visuals);
}
