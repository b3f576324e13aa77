//! Widgets for the egg timer window

use crate::theme::EggColors;
use egui::{Response, Ui, Widget};

/// Height of [`EggButton`].
pub const BUTTON_HEIGHT: f32 = 44.0;

/// Filled button spanning the available width, used for start/stop.
pub struct EggButton<'a> {
    text: &'a str,
}

impl<'a> EggButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Widget for EggButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(ui.available_width(), BUTTON_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = if response.is_pointer_button_down_on() {
                EggColors::ACCENT.linear_multiply(0.8)
            } else if response.hovered() {
                EggColors::ACCENT.linear_multiply(0.9)
            } else {
                EggColors::ACCENT
            };
            painter.rect_filled(rect, 4.0, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::TextStyle::Button.resolve(ui.style()),
                EggColors::ON_ACCENT,
            );
        }

        response
    }
}

/// Light gray rounded border around `add_contents`, as used by the duration
/// field.
pub fn bordered<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(EggColors::BACKGROUND)
        .stroke(egui::Stroke::new(2.0, EggColors::FIELD_BORDER))
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::symmetric(4.0, 4.0))
        .show(ui, add_contents)
}

/// Status bar: one line of small text
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(EggColors::BACKGROUND)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}
