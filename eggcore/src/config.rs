//! Window and timing settings
//!
//! Everything has a built-in default; nothing is read from disk or the
//! environment. The struct is serde-friendly so an embedder can supply its
//! own values.

use crate::error::Result;
use crate::ticker::{check_tick_rate, DEFAULT_TICK_HZ};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggTimerConfig {
    pub title: String,
    /// Logical window size, width then height.
    pub window_size: [f32; 2],
    pub resizable: bool,
    /// How often progress advances, in hertz.
    pub tick_hz: f32,
}

impl Default for EggTimerConfig {
    fn default() -> Self {
        Self {
            title: "Egg Timer".to_string(),
            window_size: [400.0, 600.0],
            resizable: false,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl EggTimerConfig {
    pub fn validate(&self) -> Result<()> {
        check_tick_rate(self.tick_hz)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimerError;

    #[test]
    fn test_defaults() {
        let config = EggTimerConfig::default();
        assert_eq!(config.title, "Egg Timer");
        assert_eq!(config.window_size, [400.0, 600.0]);
        assert!(!config.resizable);
        assert_eq!(config.tick_hz, 25.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EggTimerConfig = serde_json::from_str(r#"{"tick_hz": 50.0}"#).unwrap();
        assert_eq!(config.tick_hz, 50.0);
        assert_eq!(config.title, "Egg Timer");

        let empty: EggTimerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EggTimerConfig::default());
    }

    #[test]
    fn test_rejects_bad_tick_rate() {
        for tick_hz in [0.0, -1.0, f32::INFINITY, 1e-30, 1e6] {
            let config = EggTimerConfig {
                tick_hz,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(TimerError::InvalidTickRate(_))));
        }
    }
}
