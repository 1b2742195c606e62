//! Headless sink that writes frames to the log

use super::{Hud, RenderSink, Rgb};
use crate::assets::Background;

/// Logs ball positions at `trace` and HUD changes at `info`
#[derive(Debug, Default)]
pub struct LogSink {
    frame: u64,
    balls_drawn: usize,
    last_hud: Option<Hud>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Balls drawn in the most recent frame
    pub fn balls_drawn(&self) -> usize {
        self.balls_drawn
    }

    pub fn last_hud(&self) -> Option<&Hud> {
        self.last_hud.as_ref()
    }
}

impl RenderSink for LogSink {
    fn clear(&mut self, background: &Background) {
        self.frame += 1;
        self.balls_drawn = 0;
        if self.frame == 1 {
            log::info!("Background: {}", background.describe());
        }
    }

    fn draw_ball(&mut self, x: f32, y: f32, radius: f32, fill: Rgb) {
        self.balls_drawn += 1;
        log::trace!(
            "frame {} ball at ({x:.0}, {y:.0}) r={radius} fill={fill:?}",
            self.frame
        );
    }

    fn draw_hud(&mut self, hud: &Hud) {
        if self.last_hud.as_ref() == Some(hud) {
            return;
        }
        match &hud.game_over_text {
            Some(text) => log::info!("{} | {} | {}", hud.hits_text, hud.misses_text, text),
            None if hud.paused => log::info!("{} | {} | Paused", hud.hits_text, hud.misses_text),
            None => log::info!("{} | {}", hud.hits_text, hud.misses_text),
        }
        self.last_hud = Some(hud.clone());
    }
}
