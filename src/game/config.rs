use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{CELL_SIZE, CanvasBounds, DEFAULT_FPS};

use super::snake::MIN_DELAY;

/// Largest accepted canvas side, in pixels
pub const MAX_CANVAS_SIDE: i32 = 4000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub canvas_width: i32,
    /// Canvas height in pixels
    pub canvas_height: i32,
    /// Frames (ticks) per second
    pub fps: u32,
    /// Frames between grid steps before the first step is taken
    pub initial_delay: u32,
    /// Seed for fruit placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            fps: DEFAULT_FPS,
            initial_delay: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom canvas size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Default::default()
        }
    }

    /// Create a small canvas for testing
    pub fn small() -> Self {
        Self::new(250, 250)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width, self.canvas_height)
    }

    /// Load a JSON config; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        debug!(?path, "config file loaded");
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if value <= 0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
            if value > MAX_CANVAS_SIDE {
                return Err(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_CANVAS_SIDE, value
                ));
            }
            if value % CELL_SIZE != 0 {
                return Err(format!(
                    "{} must be a multiple of {}, got {}",
                    name, CELL_SIZE, value
                ));
            }
        }

        if !(1..=240).contains(&self.fps) {
            return Err(format!("fps must be in [1, 240], got {}", self.fps));
        }

        if self.initial_delay < MIN_DELAY {
            return Err(format!(
                "initial_delay must be at least {}, got {}",
                MIN_DELAY, self.initial_delay
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.fps, 60);
        assert_eq!(config.bounds().columns(), 32);
        assert_eq!(config.bounds().rows(), 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(500, 250).with_seed(3);
        assert_eq!(config.canvas_width, 500);
        assert_eq!(config.canvas_height, 250);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::new(0, 600).validate().is_err());
        assert!(GameConfig::new(810, 600).validate().is_err());

        let mut config = GameConfig::default();
        config.fps = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_delay = 4;
        assert_eq!(
            config.validate(),
            Err("initial_delay must be at least 5, got 4".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_oversized_canvas() {
        assert!(GameConfig::new(MAX_CANVAS_SIDE, MAX_CANVAS_SIDE).validate().is_ok());
        assert_eq!(
            GameConfig::new(50_000, 50_000).validate(),
            Err("canvas_width must be at most 4000, got 50000".to_string())
        );
        assert!(GameConfig::new(800, 4025).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "canvas_width": 400, "seed": 9 }"#).expect("valid json");
        assert_eq!(config.canvas_width, 400);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir()
            .join(format!("canvas_snake_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "fps": 30 }"#).expect("write temp config");

        let config = GameConfig::from_file(&path).expect("load config");
        assert_eq!(config.fps, 30);
        assert_eq!(config.canvas_width, 800);

        let _ = std::fs::remove_file(&path);
        assert!(GameConfig::from_file(&path).is_err());
    }
}
