//! Frame scheduling for the egg timer window
//!
//! egui only redraws when something asks it to. `RepaintController` decides
//! when that is:
//!
//! 1. **Input** - the user clicked or typed. egui wakes by itself.
//! 2. **Counting** - a boil is running. Repaint once per tick interval so
//!    the countdown and the egg keep moving.
//! 3. **State change** - a toggle or the final tick changed what is on
//!    screen. Repaint once, right away.
//! 4. **Idle** - nothing happened. Sleep until the next input event.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()` and
//! [`RepaintController::end_frame`] at the bottom.

use std::time::Duration;

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// User input (pointer, keys, text).
    Input,
    /// One-shot request after the timer state changed.
    StateChange,
    /// Scheduled frame while a boil counts down.
    Counting,
}

pub struct RepaintController {
    counting: bool,
    needs_repaint: bool,
    interval: Duration,
    frame: u64,
    reason: RepaintReason,
}

impl RepaintController {
    /// `interval` is the cadence used while counting, normally one tick.
    pub fn new(interval: Duration) -> Self {
        Self {
            counting: false,
            needs_repaint: false,
            interval,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Turn the per-tick repaint schedule on or off.
    pub fn set_counting(&mut self, counting: bool) {
        self.counting = counting;
    }

    pub fn is_counting(&self) -> bool {
        self.counting
    }

    /// Ask for one more frame after this one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.reason = classify(self.frame, had_input, self.needs_repaint);
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        } else if self.counting {
            ctx.request_repaint_after(self.interval);
        }
    }
}

fn classify(frame: u64, had_input: bool, needs_repaint: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if had_input {
        RepaintReason::Input
    } else if needs_repaint {
        RepaintReason::StateChange
    } else {
        RepaintReason::Counting
    }
}
