//! Error types for the egg timer core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    /// The duration field did not hold a number.
    #[error("invalid boil duration {input:?}")]
    InvalidDuration { input: String },

    #[error("boil duration must not be negative, got {0}")]
    NegativeDuration(f32),

    #[error("boil duration must be finite, got {0}")]
    NonFiniteDuration(f32),

    #[error("tick rate must be a positive number of hertz, got {0}")]
    InvalidTickRate(f32),

    #[error("failed to spawn ticker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimerError>;
