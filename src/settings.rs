//! Game settings and playfield tuning
//!
//! Loaded from `click_ball.json` in the working directory when present.
//! Every field has a default, so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Settings file looked up by [`Settings::load`]
pub const SETTINGS_FILE: &str = "click_ball.json";

/// Default decorative background
pub const DEFAULT_BACKGROUND: &str = "background_img.jpg";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Playfield geometry and scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Overshoot past `width` before a ball counts as missed
    pub miss_margin: f32,
    pub ball_radius: f32,
    /// Vertical spawn band, `[spawn_y_min, spawn_y_max)`
    pub spawn_y_min: u32,
    pub spawn_y_max: u32,
    pub initial_spawn_x: f32,
    pub replacement_spawn_x: f32,
    pub miss_reset_x: f32,
    pub hit_park_x: f32,
    pub game_over_park_x: f32,
    pub max_misses: u32,
    pub velocity_bump: u32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            miss_margin: MISS_MARGIN,
            ball_radius: BALL_RADIUS,
            spawn_y_min: SPAWN_Y_MIN,
            spawn_y_max: SPAWN_Y_MAX,
            initial_spawn_x: INITIAL_SPAWN_X,
            replacement_spawn_x: REPLACEMENT_SPAWN_X,
            miss_reset_x: MISS_RESET_X,
            hit_park_x: HIT_PARK_X,
            game_over_park_x: GAME_OVER_PARK_X,
            max_misses: MAX_MISSES,
            velocity_bump: VELOCITY_BUMP,
        }
    }
}

impl Playfield {
    /// A ball whose x exceeds this has left the play area
    pub fn miss_threshold(&self) -> f32 {
        self.width + self.miss_margin
    }

    /// Clamp values that would break the simulation rules
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.ball_radius > 0.0) {
            log::warn!("ball_radius {} is invalid, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.width > 0.0) {
            self.width = defaults.width;
        }
        if !(self.height > 0.0) {
            self.height = defaults.height;
        }
        if self.miss_margin < 0.0 || self.miss_margin.is_nan() {
            self.miss_margin = 0.0;
        }
        if self.spawn_y_max <= self.spawn_y_min {
            log::warn!(
                "empty spawn band [{}, {}), using [{}, {})",
                self.spawn_y_min,
                self.spawn_y_max,
                defaults.spawn_y_min,
                defaults.spawn_y_max
            );
            self.spawn_y_min = defaults.spawn_y_min;
            self.spawn_y_max = defaults.spawn_y_max;
        }
        self.max_misses = self.max_misses.max(1);
        self.velocity_bump = self.velocity_bump.max(1);
        self
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield: Playfield,
    /// Fixed RNG seed (None = derive from the clock)
    pub seed: Option<u64>,
    /// Optional decorative background image
    pub background_path: PathBuf,
    /// Headless frame rate
    pub frame_rate: u32,
    /// Frames the headless demo runs before giving up
    pub demo_frames: u64,
    /// Chance (0-1) that the demo player lands a click on a given frame
    pub demo_accuracy: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            seed: None,
            background_path: PathBuf::from(DEFAULT_BACKGROUND),
            frame_rate: FRAME_RATE,
            demo_frames: u64::from(FRAME_RATE) * 120,
            demo_accuracy: 0.02,
        }
    }
}

impl Settings {
    /// Load settings from `click_ball.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Load and sanitize settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(settings.sanitized())
    }

    pub fn sanitized(mut self) -> Self {
        self.playfield = self.playfield.sanitized();
        self.frame_rate = self.frame_rate.max(1);
        self.demo_accuracy = if self.demo_accuracy.is_nan() {
            0.0
        } else {
            self.demo_accuracy.clamp(0.0, 1.0)
        };
        self
    }

    /// Seed to start the run with
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
