//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod input;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallId};
pub use input::{ball_at, click_at, on_click};
pub use state::{GameEvent, GamePhase, GameState, LoopState};
pub use tick::{tick, tick_n};
