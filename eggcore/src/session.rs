//! The event-loop side of the timer
//!
//! A [`Session`] owns the one [`TimerState`] and the tick source feeding it.
//! The UI thread calls [`Session::pump`] once per frame and
//! [`Session::handle`] for user input; nothing else touches the state.

use crate::ticker::TickSource;
use crate::timer::{Phase, TimerState, Transition};

/// Input collected from the window this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UserInput {
    /// Start/stop clicked, with the current contents of the duration field.
    Toggle(String),
    None,
}

pub struct Session<S> {
    state: TimerState,
    ticks: S,
}

impl<S: TickSource> Session<S> {
    pub fn new(ticks: S, tick_hz: f32) -> Self {
        Self {
            state: TimerState::new(tick_hz),
            ticks,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Apply user input. Returns true if the state changed.
    pub fn handle(&mut self, input: UserInput) -> bool {
        let text = match input {
            UserInput::Toggle(text) => text,
            UserInput::None => return false,
        };

        if !self.state.boiling() {
            // Ticks queued while idle belong to no boil.
            let stale = self.ticks.drain();
            if stale > 0 {
                tracing::trace!(stale, "discarded ticks queued before start");
            }
        }

        match self.state.toggle(&text) {
            Transition::Started { duration } => {
                tracing::info!(duration, progress = self.state.progress(), "boil started");
            }
            Transition::Stopped { progress } => {
                tracing::info!(progress, "boil stopped");
            }
        }
        true
    }

    /// Apply every tick that arrived since the last call. Returns true if
    /// progress moved and the window needs a redraw.
    pub fn pump(&mut self) -> bool {
        let pending = self.ticks.drain();
        let was_done = self.state.phase() == Phase::Done;

        let mut changed = false;
        for _ in 0..pending {
            if !self.state.tick() {
                break;
            }
            changed = true;
        }

        if !was_done && self.state.phase() == Phase::Done {
            tracing::info!(duration = self.state.boil_duration(), "boil finished");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::{TickEvent, DEFAULT_TICK_HZ};
    use crossbeam_channel::{unbounded, Receiver, Sender};

    fn session() -> (Sender<TickEvent>, Session<Receiver<TickEvent>>) {
        let (tx, rx) = unbounded();
        (tx, Session::new(rx, DEFAULT_TICK_HZ))
    }

    fn send(tx: &Sender<TickEvent>, count: usize) {
        for _ in 0..count {
            tx.send(TickEvent).unwrap();
        }
    }

    #[test]
    fn test_pump_applies_pending_ticks() {
        let (tx, mut session) = session();
        session.handle(UserInput::Toggle("1".into()));
        send(&tx, 5);
        assert!(session.pump());
        assert_eq!(session.state().progress(), 0.2);
        assert!(!session.pump());
    }

    #[test]
    fn test_no_input_changes_nothing() {
        let (_tx, mut session) = session();
        assert!(!session.handle(UserInput::None));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_idle_ticks_do_not_move_progress() {
        let (tx, mut session) = session();
        send(&tx, 30);
        assert!(!session.pump());
        assert_eq!(session.state().progress(), 0.0);
    }

    #[test]
    fn test_stale_ticks_discarded_on_start() {
        let (tx, mut session) = session();
        send(&tx, 10);
        session.handle(UserInput::Toggle("1".into()));
        assert!(!session.pump());
        assert_eq!(session.state().progress(), 0.0);

        send(&tx, 1);
        assert!(session.pump());
        assert_eq!(session.state().progress(), 0.04);
    }

    #[test]
    fn test_full_boil_through_channel() {
        let (tx, mut session) = session();
        session.handle(UserInput::Toggle("2".into()));
        send(&tx, 49);
        session.pump();
        assert_eq!(session.phase(), Phase::Boiling);
        // Extra ticks past the end are consumed without effect.
        send(&tx, 10);
        assert!(session.pump());
        assert_eq!(session.phase(), Phase::Done);
        assert_eq!(session.state().progress(), 1.0);
        send(&tx, 3);
        assert!(!session.pump());
    }

    #[test]
    fn test_pause_and_resume() {
        let (tx, mut session) = session();
        session.handle(UserInput::Toggle("10".into()));
        send(&tx, 125);
        session.pump();
        assert!(session.handle(UserInput::Toggle(String::new())));
        assert_eq!(session.phase(), Phase::Idle);

        send(&tx, 40);
        session.handle(UserInput::Toggle("10".into()));
        assert_eq!(session.state().boil_duration(), 20.0);
        assert!(!session.pump());
        assert_eq!(session.state().progress(), 0.5);
    }

    #[test]
    fn test_empty_input_finishes_on_first_tick() {
        let (tx, mut session) = session();
        session.handle(UserInput::Toggle(String::new()));
        assert_eq!(session.state().boil_duration(), 0.0);
        send(&tx, 1);
        assert!(session.pump());
        assert_eq!(session.phase(), Phase::Done);
    }
}
