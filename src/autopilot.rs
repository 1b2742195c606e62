//! Demo player for headless runs
//!
//! Drives the game only through the public click/pause API, the same way a
//! frontend would. Seeded, so a demo run is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{BallId, GameState, click_at};

/// Periodic pause: pause every `every` frames for `length` frames
#[derive(Debug, Clone, Copy)]
pub struct PauseSchedule {
    pub every: u64,
    pub length: u64,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Chance (0-1) of landing a click on any given frame
    accuracy: f32,
    schedule: Option<PauseSchedule>,
    frame: u64,
    paused_at: Option<u64>,
}

impl Autopilot {
    pub fn new(seed: u64, accuracy: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            schedule: None,
            frame: 0,
            paused_at: None,
        }
    }

    pub fn with_pause_schedule(mut self, every: u64, length: u64) -> Self {
        if every > 0 {
            self.schedule = Some(PauseSchedule { every, length });
        }
        self
    }

    /// Act for one frame. Returns the ball that was hit, if any.
    pub fn update(&mut self, state: &mut GameState) -> Option<BallId> {
        self.frame += 1;
        self.update_pause(state);

        if state.is_paused() || state.is_game_over() {
            return None;
        }

        // Go for the ball closest to escaping
        let target = state
            .visible_balls()
            .max_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .map(|b| b.pos)?;

        if self.rng.random::<f32>() < self.accuracy {
            click_at(state, target)
        } else {
            None
        }
    }

    fn update_pause(&mut self, state: &mut GameState) {
        let Some(schedule) = self.schedule else {
            return;
        };
        match self.paused_at {
            Some(start) if self.frame - start >= schedule.length => {
                state.resume();
                self.paused_at = None;
            }
            Some(_) => {}
            None if self.frame % schedule.every == 0 => {
                if state.pause() {
                    self.paused_at = Some(self.frame);
                }
            }
            None => {}
        }
    }
}
