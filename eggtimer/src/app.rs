//! The egg timer window
//!
//! Top to bottom: the egg, the duration field, the progress bar and the
//! start/stop button. All state lives in the [`Session`]; this file only
//! reads it and forwards clicks.

use eggcore::egg::{egg_color, egg_outline, EGG_AREA_HEIGHT};
use eggcore::repaint::RepaintController;
use eggcore::theme::EggColors;
use eggcore::widgets::{bordered, status_bar, EggButton, BUTTON_HEIGHT};
use eggcore::{Phase, Session, Ticker, UserInput};
use egui::{Align, CentralPanel, Context, Layout, Pos2, Shape, Stroke, TopBottomPanel};

pub struct EggTimerApp {
    session: Session<Ticker>,
    /// Contents of the duration field.
    duration_input: String,
    repaint: RepaintController,
}

impl EggTimerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, ticker: Ticker, tick_hz: f32) -> Self {
        let interval = ticker.interval();
        Self {
            session: Session::new(ticker, tick_hz),
            duration_input: String::new(),
            repaint: RepaintController::new(interval),
        }
    }

    fn status_text(&self) -> String {
        let state = self.session.state();
        let phase = self.session.phase();
        let percent = state.progress() * 100.0;
        match phase {
            Phase::Idle if state.progress() == 0.0 => "enter seconds and press start".to_string(),
            Phase::Idle if state.progress() >= 1.0 => "done  |  enter seconds for a new boil".to_string(),
            Phase::Idle => format!("paused  |  {percent:.0}%"),
            Phase::Boiling => format!(
                "{}  |  {:.1}s left  |  {percent:.0}%",
                phase.name(),
                state.boil_remain().max(0.0),
            ),
            Phase::Done => format!("{}  |  press stop", phase.name()),
        }
    }

    fn draw_egg(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), EGG_AREA_HEIGHT),
            egui::Sense::hover(),
        );
        if !ui.is_rect_visible(rect) {
            return;
        }
        // The pointed end reaches b + d above the center.
        let center = Pos2::new(rect.center().x, rect.min.y + 180.0);
        let color = egg_color(self.session.state().progress());
        ui.painter()
            .add(Shape::convex_polygon(egg_outline(center), color, Stroke::NONE));
    }

    fn draw_duration_field(&mut self, ui: &mut egui::Ui) {
        if let Some(text) = self.session.state().remain_text() {
            self.duration_input = text;
        }

        ui.add_space(40.0);
        bordered(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.duration_input)
                    .hint_text("sec")
                    .desired_width(60.0)
                    .frame(false),
            );
        });
    }

    fn draw_progress(&self, ui: &mut egui::Ui) {
        ui.add(
            egui::ProgressBar::new(self.session.state().progress())
                .desired_height(6.0)
                .fill(EggColors::ACCENT),
        );
    }

    /// Returns true when the start/stop button was clicked.
    fn draw_button(&self, ui: &mut egui::Ui) -> bool {
        let label = if self.session.state().boiling() { "Stop" } else { "Start" };
        let width = (ui.available_width() - 2.0 * 35.0).max(0.0);

        ui.add_space(25.0);
        let clicked = ui.add_sized([width, BUTTON_HEIGHT], EggButton::new(label)).clicked();
        ui.add_space(25.0);
        clicked
    }
}

impl eframe::App for EggTimerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        // Ticks are applied before drawing, so this frame already shows them.
        if self.session.pump() {
            tracing::trace!(progress = self.session.state().progress(), "progress advanced");
        }

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });

        let mut input = UserInput::None;
        CentralPanel::default().show(ctx, |ui| {
            // Laid out from the bottom up so spare height ends up above the egg.
            ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                if self.draw_button(ui) {
                    input = UserInput::Toggle(self.duration_input.clone());
                }
                self.draw_progress(ui);
                self.draw_duration_field(ui);
                self.draw_egg(ui);
            });
        });

        if self.session.handle(input) {
            self.repaint.mark_needs_repaint();
        }

        self.repaint.set_counting(self.session.phase() == Phase::Boiling);
        tracing::trace!(frame = self.repaint.frame(), reason = ?self.repaint.reason(), "frame done");
        self.repaint.end_frame(ctx);
    }
}
