//! Click handling
//!
//! A hit parks the clicked ball off the left edge with a faster velocity
//! and spawns a fresh ball, so every hit grows the field by one.

use glam::Vec2;

use super::ball::BallId;
use super::state::{GameEvent, GameState};

/// Handle a click on a ball. Returns true if it scored.
///
/// Ignored while paused or after game over, and for unknown ids.
pub fn on_click(state: &mut GameState, id: BallId) -> bool {
    if state.is_paused() || state.is_game_over() {
        log::debug!("Click on ball {} ignored ({:?})", id.0, state.phase());
        return false;
    }
    let Some(index) = state.balls.iter().position(|b| b.id == id) else {
        log::debug!("Click on unknown ball {}", id.0);
        return false;
    };

    state.record_hit();

    let park_x = state.playfield().hit_park_x;
    let bump = state.playfield().velocity_bump;
    let ball = &mut state.balls[index];
    ball.park(park_x);
    ball.bump_velocity(bump);
    log::debug!("Hit ball {} (velocity now {})", id.0, ball.velocity());

    let hits = state.hits();
    state.push_event(GameEvent::Hit { ball: id, hits });
    state.spawn_replacement_ball();
    true
}

/// Topmost ball under `point` (later spawns draw on top)
pub fn ball_at(state: &GameState, point: Vec2) -> Option<BallId> {
    state
        .balls()
        .iter()
        .rev()
        .find(|b| b.contains(point))
        .map(|b| b.id)
}

/// Hit test plus click, for adapters that only know pointer coordinates
pub fn click_at(state: &mut GameState, point: Vec2) -> Option<BallId> {
    let id = ball_at(state, point)?;
    on_click(state, id).then_some(id)
}
