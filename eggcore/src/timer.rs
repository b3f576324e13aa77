//! Boil timer state machine
//!
//! Two transitions drive everything: [`TimerState::toggle`] when the
//! start/stop button is clicked, and [`TimerState::tick`] for every tick the
//! ticker delivers. Rendering only reads the state.
//!
//! A boil that reaches 100% stays `boiling` until the user stops it; that is
//! the [`Phase::Done`] state.

use crate::error::{Result, TimerError};

/// Where the timer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Boiling,
    Done,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Boiling => "boiling",
            Phase::Done => "done",
        }
    }
}

/// Result of a toggle, for logging and repaint decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Started { duration: f32 },
    Stopped { progress: f32 },
}

#[derive(Debug, Clone)]
pub struct TimerState {
    boiling: bool,
    progress: f32,
    boil_duration: f32,
    tick_hz: f32,
    /// Progress when the current run started.
    origin: f64,
    /// Ticks applied since the current run started.
    run_ticks: u64,
}

impl TimerState {
    pub fn new(tick_hz: f32) -> Self {
        Self {
            boiling: false,
            progress: 0.0,
            boil_duration: 0.0,
            tick_hz,
            origin: 0.0,
            run_ticks: 0,
        }
    }

    pub fn boiling(&self) -> bool {
        self.boiling
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Total length of the current boil in seconds. Meaningless while idle.
    pub fn boil_duration(&self) -> f32 {
        self.boil_duration
    }

    pub fn phase(&self) -> Phase {
        match (self.boiling, self.progress >= 1.0) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::Boiling,
            (true, true) => Phase::Done,
        }
    }

    /// Start/stop button.
    ///
    /// Starting reads `input` as the remaining seconds. When resuming a
    /// paused boil the total duration is scaled up so the entered time is
    /// what is left: `duration = input / (1 - progress)`. Starting from a
    /// finished boil resets progress to zero first.
    ///
    /// A duration too large for `f32` after that scaling is clamped to
    /// `f32::MAX`; such a boil is accepted but never visibly advances.
    ///
    /// Stopping only clears `boiling`; progress is kept so the next start
    /// resumes.
    pub fn toggle(&mut self, input: &str) -> Transition {
        if self.boiling {
            self.boiling = false;
            return Transition::Stopped {
                progress: self.progress,
            };
        }

        if self.progress >= 1.0 {
            self.progress = 0.0;
        }

        let remaining = parse_duration_or_zero(input);
        let duration = remaining / (1.0 - self.progress);
        self.boil_duration = if duration.is_finite() {
            duration
        } else {
            tracing::warn!(
                remaining,
                progress = self.progress,
                "boil duration overflowed, clamping"
            );
            f32::MAX
        };
        self.boiling = true;
        self.origin = self.progress as f64;
        self.run_ticks = 0;

        Transition::Started {
            duration: self.boil_duration,
        }
    }

    /// Advance by one tick. Returns true if progress changed.
    ///
    /// A zero-length boil completes on its first tick.
    pub fn tick(&mut self) -> bool {
        if !self.boiling || self.progress >= 1.0 {
            return false;
        }

        if self.boil_duration <= 0.0 {
            self.progress = 1.0;
            return true;
        }

        // Recomputed from the tick count so f32 rounding never adds an
        // extra tick at the end.
        self.run_ticks += 1;
        let run_length = self.tick_hz as f64 * self.boil_duration as f64;
        let next = self.origin + self.run_ticks as f64 / run_length;
        let before = self.progress;
        self.progress = if next >= 1.0 { 1.0 } else { next as f32 };
        self.progress != before
    }

    /// Seconds left in the current boil.
    pub fn boil_remain(&self) -> f32 {
        (1.0 - self.progress) * self.boil_duration
    }

    /// Countdown text for the duration field, while a boil is counting down.
    pub fn remain_text(&self) -> Option<String> {
        if self.phase() != Phase::Boiling {
            return None;
        }
        Some(format!("{:.1}", round_tenths(self.boil_remain())))
    }
}

/// Round half away from zero at the tenths digit.
pub fn round_tenths(value: f32) -> f32 {
    let scaled = value * 10.0;
    // Values this large have no fractional digits left to round.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 10.0
}

/// Parse the duration field as a number of seconds.
pub fn parse_duration(input: &str) -> Result<f32> {
    let trimmed = input.trim();
    let value: f32 = trimmed.parse().map_err(|_| TimerError::InvalidDuration {
        input: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(TimerError::NonFiniteDuration(value));
    }
    if value < 0.0 {
        return Err(TimerError::NegativeDuration(value));
    }
    Ok(value)
}

/// Best-effort parse used by the start button: anything unusable becomes a
/// zero-second boil. The user never sees an error.
pub fn parse_duration_or_zero(input: &str) -> f32 {
    match parse_duration(input) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "falling back to a zero boil duration");
            0.0
        }
    }
}
