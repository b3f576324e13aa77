//! Egg timer theme
//!
//! Light material-style visuals: white panel, indigo accent, light gray
//! field borders.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct EggColors;

impl EggColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT: Color32 = Color32::from_rgb(0, 0, 0);
    /// Button fill, progress bar and text selection.
    pub const ACCENT: Color32 = Color32::from_rgb(63, 81, 181);
    pub const ON_ACCENT: Color32 = Color32::from_rgb(255, 255, 255);
    /// Border around the duration field.
    pub const FIELD_BORDER: Color32 = Color32::from_rgb(204, 204, 204);
}

pub struct EggTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_small: f32,
    pub corner_radius: f32,
    pub item_spacing: f32,
}

impl Default for EggTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_button: 18.0,
            font_size_small: 12.0,
            corner_radius: 4.0,
            item_spacing: 0.0,
        }
    }
}

impl EggTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.panel_fill = EggColors::BACKGROUND;
        visuals.window_fill = EggColors::BACKGROUND;
        visuals.extreme_bg_color = EggColors::BACKGROUND;
        visuals.selection.bg_fill = EggColors::ACCENT.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, EggColors::ACCENT);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, EggColors::TEXT);

        // The duration field draws its own border; keep the text edit frame quiet.
        let rounding = Rounding::same(self.corner_radius);
        for ws in [&mut visuals.widgets.inactive, &mut visuals.widgets.hovered, &mut visuals.widgets.active] {
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, EggColors::TEXT);
            ws.rounding = rounding;
        }

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(12.0, 10.0);

        ctx.set_style(style);
    }
}
