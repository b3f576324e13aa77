//! eggcore - timer core and drawing helpers for the egg timer

pub mod config;
pub mod egg;
pub mod error;
pub mod repaint;
pub mod session;
pub mod theme;
pub mod ticker;
pub mod timer;
pub mod widgets;

pub use config::EggTimerConfig;
pub use error::TimerError;
pub use repaint::RepaintController;
pub use session::{Session, UserInput};
pub use theme::EggTheme;
pub use ticker::{TickEvent, TickSource, Ticker};
pub use timer::{Phase, TimerState};
