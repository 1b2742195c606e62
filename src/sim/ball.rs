//! Ball entity
//!
//! A ball only ever moves horizontally and its velocity only ever grows.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::START_VELOCITY;
use crate::render::Rgb;

/// Stable ball handle, unique within a game (survives resets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BallId(pub u32);

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    /// Center; `pos.y` is fixed after spawn
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick, always >= 1
    velocity: u32,
    pub fill: Rgb,
}

impl Ball {
    pub fn spawn(id: BallId, x: f32, y: f32, radius: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            radius,
            velocity: START_VELOCITY,
            fill: Rgb::WHITE,
        }
    }

    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub fn velocity(&self) -> u32 {
        self.velocity
    }

    /// Move one tick to the right
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x += self.velocity as f32;
    }

    /// Velocity never decreases
    pub fn bump_velocity(&mut self, delta: u32) {
        self.velocity = self.velocity.saturating_add(delta);
    }

    /// Relocate horizontally (miss reset, hit, game over)
    #[inline]
    pub fn park(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn contains(&self, point: Vec2) -> bool {
        crate::circle_contains(self.pos, self.radius, point)
    }
}
