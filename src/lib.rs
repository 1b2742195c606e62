//! Click Ball - a click-the-ball reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balls, miss detection, scoring, pause/reset)
//! - `render`: Presentation contract (render sink, HUD text, colors)
//! - `assets`: Optional background image with solid-color fallback
//! - `settings`: Data-driven playfield tuning
//! - `autopilot`: Seeded demo player for headless runs

pub mod assets;
pub mod autopilot;
pub mod render;
pub mod settings;
pub mod sim;

pub use assets::Background;
pub use settings::{Playfield, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Display refresh rate the simulation is stepped at (one tick per frame)
    pub const FRAME_RATE: u32 = 60;

    /// Visible playfield dimensions
    pub const PLAY_WIDTH: f32 = 700.0;
    pub const PLAY_HEIGHT: f32 = 500.0;
    /// Overshoot past the right edge before a ball counts as missed
    pub const MISS_MARGIN: f32 = 25.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    pub const START_VELOCITY: u32 = 1;
    /// Velocity added to a ball each time it is hit
    pub const VELOCITY_BUMP: u32 = 1;

    /// Vertical spawn band, `[min, max)`
    pub const SPAWN_Y_MIN: u32 = 60;
    pub const SPAWN_Y_MAX: u32 = 450;

    /// Horizontal spawn points
    pub const INITIAL_SPAWN_X: f32 = 25.0;
    pub const REPLACEMENT_SPAWN_X: f32 = 5.0;

    /// Where balls are parked
    pub const MISS_RESET_X: f32 = 0.0;
    pub const HIT_PARK_X: f32 = -50.0;
    pub const GAME_OVER_PARK_X: f32 = -40.0;

    /// Misses that end the round
    pub const MAX_MISSES: u32 = 5;
}

/// Circle hit test (boundary inclusive)
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains() {
        let center = Vec2::new(100.0, 100.0);
        assert!(circle_contains(center, 25.0, center));
        assert!(circle_contains(center, 25.0, Vec2::new(125.0, 100.0)));
        assert!(!circle_contains(center, 25.0, Vec2::new(118.0, 118.0)));
    }
}
