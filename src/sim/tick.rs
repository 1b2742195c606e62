//! Per-frame simulation tick
//!
//! One call per display frame. Each ball either crosses the miss threshold
//! (and restarts at the left edge) or advances by its velocity.

use super::state::{GameEvent, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    // Stopped on pause, game over, and while a reset rebuilds the balls
    if !state.is_running() || state.balls.is_empty() {
        return;
    }

    state.time_ticks += 1;

    let threshold = state.playfield().miss_threshold();
    let reset_x = state.playfield().miss_reset_x;

    for i in 0..state.balls.len() {
        let ball = &mut state.balls[i];
        if ball.pos.x > threshold {
            ball.park(reset_x);
            let id = ball.id;
            let misses = state.misses() + 1;
            state.push_event(GameEvent::Missed { ball: id, misses });
            state.record_miss();

            // Game over parked every ball; leave them there
            if state.is_game_over() {
                break;
            }
        } else {
            ball.advance();
        }
    }
}

/// Run `frames` ticks back to back
pub fn tick_n(state: &mut GameState, frames: u64) {
    for _ in 0..frames {
        tick(state);
    }
}
