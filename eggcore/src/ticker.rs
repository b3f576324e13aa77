//! Fixed-rate tick source
//!
//! The ticker runs on its own thread and pushes a [`TickEvent`] into a
//! bounded channel every `1 / rate` seconds. The UI thread drains the
//! channel once per frame; it never shares any other state with the ticker.
//!
//! Ticks are cheap and disposable. If the channel is full the tick is
//! dropped rather than blocking the ticker, so delivery count under load is
//! best-effort.

use crate::error::{Result, TimerError};
use crossbeam_channel::{bounded, Receiver, TrySendError};
use std::thread::{self, sleep, JoinHandle};
use std::time::Duration;

/// Rate the egg timer advances its progress at.
pub const DEFAULT_TICK_HZ: f32 = 25.0;

/// Slowest supported tick rate: one tick every 100 seconds.
pub const MIN_TICK_HZ: f32 = 0.01;
/// Fastest supported tick rate.
pub const MAX_TICK_HZ: f32 = 1000.0;

/// Accept `rate_hz` only within [`MIN_TICK_HZ`, `MAX_TICK_HZ`].
pub fn check_tick_rate(rate_hz: f32) -> Result<f32> {
    if (MIN_TICK_HZ..=MAX_TICK_HZ).contains(&rate_hz) {
        Ok(rate_hz)
    } else {
        Err(TimerError::InvalidTickRate(rate_hz))
    }
}

/// One timing signal. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent;

/// Anything the timer can pull ticks from.
///
/// Implemented by [`Ticker`] for real use and by a bare channel receiver so
/// tests can feed ticks by hand.
pub trait TickSource {
    /// Take every pending tick without blocking and return how many there were.
    fn drain(&mut self) -> usize;
}

impl TickSource for Receiver<TickEvent> {
    fn drain(&mut self) -> usize {
        self.try_iter().count()
    }
}

/// Handle to a running ticker thread.
///
/// Dropping the handle disconnects the channel; the thread notices on its
/// next send and exits.
pub struct Ticker {
    rx: Receiver<TickEvent>,
    interval: Duration,
    _thread: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker thread.
    pub fn start(rate_hz: f32) -> Result<Self> {
        let rate_hz = check_tick_rate(rate_hz)?;
        let interval = Duration::from_secs_f32(1.0 / rate_hz);
        // Holds one second of backlog.
        let capacity = (rate_hz.ceil() as usize).max(1);
        let (tx, rx) = bounded(capacity);

        let thread = thread::Builder::new()
            .name("egg-ticker".into())
            .spawn(move || {
                tracing::debug!(?interval, "ticker started");
                let mut dropped: u64 = 0;
                loop {
                    sleep(interval);
                    match tx.try_send(TickEvent) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            dropped += 1;
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            tracing::debug!(dropped, "tick receiver gone, ticker stopping");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            rx,
            interval,
            _thread: thread,
        })
    }

    /// Time between two ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickSource for Ticker {
    fn drain(&mut self) -> usize {
        self.rx.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Instant;

    #[test]
    fn test_receiver_drain_counts_pending() {
        let (tx, mut rx) = unbounded();
        for _ in 0..3 {
            tx.send(TickEvent).unwrap();
        }
        assert_eq!(rx.drain(), 3);
        assert_eq!(rx.drain(), 0);
    }

    #[test]
    fn test_drain_after_sender_dropped() {
        let (tx, mut rx) = unbounded();
        tx.send(TickEvent).unwrap();
        drop(tx);
        assert_eq!(rx.drain(), 1);
        assert_eq!(rx.drain(), 0);
    }

    #[test]
    fn test_ticker_delivers_ticks() {
        let ticker = Ticker::start(200.0).unwrap();
        assert_eq!(ticker.interval(), Duration::from_secs_f32(1.0 / 200.0));
        let tick = ticker.rx.recv_timeout(Duration::from_secs(2));
        assert_eq!(tick, Ok(TickEvent));
    }

    #[test]
    fn test_ticker_drops_when_full() {
        // Capacity is one second of ticks; wait well past it without draining.
        let mut ticker = Ticker::start(100.0).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !ticker.rx.is_full() && Instant::now() < deadline {
            sleep(Duration::from_millis(20));
        }
        sleep(Duration::from_millis(100));
        let pending = ticker.drain();
        assert!(pending <= 100, "backlog exceeded capacity: {pending}");
        assert!(pending > 0);
    }

    #[test]
    fn test_ticker_rejects_bad_rate() {
        assert!(matches!(Ticker::start(0.0), Err(TimerError::InvalidTickRate(_))));
        assert!(matches!(Ticker::start(-25.0), Err(TimerError::InvalidTickRate(_))));
        assert!(matches!(Ticker::start(f32::NAN), Err(TimerError::InvalidTickRate(_))));
        assert!(matches!(Ticker::start(1e-30), Err(TimerError::InvalidTickRate(_))));
        assert!(matches!(Ticker::start(1e6), Err(TimerError::InvalidTickRate(_))));
    }

    #[test]
    fn test_tick_rate_range() {
        assert_eq!(check_tick_rate(MIN_TICK_HZ).unwrap(), MIN_TICK_HZ);
        assert_eq!(check_tick_rate(MAX_TICK_HZ).unwrap(), MAX_TICK_HZ);
        assert_eq!(check_tick_rate(DEFAULT_TICK_HZ).unwrap(), DEFAULT_TICK_HZ);
        for rate_hz in [0.0, 0.001, 1000.5, f32::MAX, f32::INFINITY, f32::NAN] {
            assert!(check_tick_rate(rate_hz).is_err(), "rate {rate_hz}");
        }
    }

    #[test]
    fn test_ticker_thread_exits_on_drop() {
        let ticker = Ticker::start(500.0).unwrap();
        let Ticker { rx, _thread: thread, .. } = ticker;
        drop(rx);
        // Joining only returns if the thread saw the disconnect.
        assert!(thread.join().is_ok());
    }
}
