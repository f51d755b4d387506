//! Game configuration
//!
//! Layers, later wins:
//!
//! 1. built-in defaults (the constants in [`crate::types`])
//! 2. a JSON file named by `SNAKE_CONFIG`
//! 3. per-field environment overrides (`SNAKE_GRID_WIDTH`, `SNAKE_SEED`, ...)
//!
//! Unparseable environment values are ignored, so a typo falls back to the
//! file or default value instead of aborting startup.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    APPLE_INTERVAL_MS, EATING_MULTIPLIER, GRID_HEIGHT, GRID_WIDTH, MIN_TICK_MS, START_TICK_MS,
};

/// Largest accepted board side
pub const MAX_GRID_SIDE: u16 = 200;

/// Largest accepted tick interval
pub const MAX_TICK_MS: f64 = 60_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Tick interval at the start of every run
    pub start_tick_ms: f64,
    pub apple_interval_ms: u64,
    /// Applied to the tick interval each time an apple is eaten
    pub eating_multiplier: f64,
    /// The tick interval never drops below this
    pub min_tick_ms: f64,
    /// Fixed RNG seed for reproducible apple placement
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            start_tick_ms: START_TICK_MS,
            apple_interval_ms: APPLE_INTERVAL_MS,
            eating_multiplier: EATING_MULTIPLIER,
            min_tick_ms: MIN_TICK_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// A seeded default config (deterministic apples)
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Defaults, then `SNAKE_CONFIG` file, then environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("SNAKE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text).context("failed to parse config JSON")?;
        Ok(config)
    }

    /// Apply `SNAKE_*` overrides using `lookup` to read variables
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        if let Some(v) = parsed(&lookup, "SNAKE_GRID_WIDTH") {
            self.grid_width = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_GRID_HEIGHT") {
            self.grid_height = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_START_TICK_MS") {
            self.start_tick_ms = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_APPLE_INTERVAL_MS") {
            self.apple_interval_ms = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_EATING_MULTIPLIER") {
            self.eating_multiplier = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_MIN_TICK_MS") {
            self.min_tick_ms = v;
        }
        if let Some(v) = parsed(&lookup, "SNAKE_SEED") {
            self.seed = Some(v);
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, side) in [("grid_width", self.grid_width), ("grid_height", self.grid_height)] {
            if side == 0 || side > MAX_GRID_SIDE {
                bail!("{name} must be in 1..={MAX_GRID_SIDE}, got {side}");
            }
        }
        let ticks = [
            ("start_tick_ms", self.start_tick_ms),
            ("min_tick_ms", self.min_tick_ms),
        ];
        for (name, ms) in ticks {
            if !(ms > 0.0 && ms <= MAX_TICK_MS) {
                bail!("{name} must be in (0, {MAX_TICK_MS}], got {ms}");
            }
        }
        if self.min_tick_ms > self.start_tick_ms {
            bail!(
                "min_tick_ms ({}) exceeds start_tick_ms ({})",
                self.min_tick_ms,
                self.start_tick_ms
            );
        }
        if !(self.eating_multiplier > 0.0 && self.eating_multiplier < 1.0) {
            bail!(
                "eating_multiplier must be in (0, 1), got {}",
                self.eating_multiplier
            );
        }
        if self.apple_interval_ms == 0 {
            bail!("apple_interval_ms must be positive");
        }
        Ok(())
    }

    pub fn apple_interval(&self) -> Duration {
        Duration::from_millis(self.apple_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_original_game() {
        let c = GameConfig::default();
        assert_eq!((c.grid_width, c.grid_height), (20, 20));
        assert_eq!(c.start_tick_ms, 500.0);
        assert_eq!(c.apple_interval(), Duration::from_secs(5));
        assert_eq!(c.eating_multiplier, 0.8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn json_keeps_defaults_for_missing_fields() {
        let c = GameConfig::from_json(r#"{"grid_width": 30, "seed": 7}"#).unwrap();
        assert_eq!(c.grid_width, 30);
        assert_eq!(c.grid_height, 20);
        assert_eq!(c.seed, Some(7));
    }

    #[test]
    fn json_syntax_error_is_reported() {
        assert!(GameConfig::from_json("{grid_width:").is_err());
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let mut c = GameConfig::default();
        c.apply_overrides(env(&[
            ("SNAKE_GRID_HEIGHT", " 12 "),
            ("SNAKE_START_TICK_MS", "fast"),
            ("SNAKE_SEED", "42"),
        ]));
        assert_eq!(c.grid_height, 12);
        assert_eq!(c.start_tick_ms, 500.0);
        assert_eq!(c.seed, Some(42));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            GameConfig {
                grid_width: 0,
                ..GameConfig::default()
            },
            GameConfig {
                grid_height: MAX_GRID_SIDE + 1,
                ..GameConfig::default()
            },
            GameConfig {
                eating_multiplier: 1.5,
                ..GameConfig::default()
            },
            GameConfig {
                eating_multiplier: 0.0,
                ..GameConfig::default()
            },
            GameConfig {
                eating_multiplier: 1.0,
                ..GameConfig::default()
            },
            GameConfig {
                start_tick_ms: 1e300,
                ..GameConfig::default()
            },
            GameConfig {
                start_tick_ms: f64::INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                min_tick_ms: 600.0,
                ..GameConfig::default()
            },
            GameConfig {
                start_tick_ms: f64::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                apple_interval_ms: 0,
                ..GameConfig::default()
            },
        ];
        for c in bad {
            assert!(c.validate().is_err(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn validate_accepts_longest_tick() {
        let c = GameConfig {
            start_tick_ms: MAX_TICK_MS,
            min_tick_ms: MAX_TICK_MS,
            ..GameConfig::default()
        };
        assert!(c.validate().is_ok());
    }
}
