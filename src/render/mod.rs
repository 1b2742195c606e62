//! Presentation contract
//!
//! The simulation never draws. A frontend implements [`RenderSink`] and
//! calls [`present`] once per frame after ticking.

pub mod hud;
pub mod log_sink;

use serde::{Deserialize, Serialize};

use crate::assets::Background;
use crate::sim::GameState;

pub use hud::Hud;
pub use log_sink::LogSink;

/// 8-bit RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const SLATE_GRAY: Rgb = Rgb(112, 128, 144);
    pub const NAVY: Rgb = Rgb(0, 0, 128);
    pub const DARK_RED: Rgb = Rgb(139, 0, 0);
    pub const FIREBRICK: Rgb = Rgb(178, 34, 34);

    /// Normalized RGBA for GPU-style consumers
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

/// Drawing surface supplied by a frontend
pub trait RenderSink {
    fn clear(&mut self, background: &Background);
    fn draw_ball(&mut self, x: f32, y: f32, radius: f32, fill: Rgb);
    fn draw_hud(&mut self, hud: &Hud);
}

/// Draw one frame: background, visible balls in spawn order, then the HUD
pub fn present(state: &GameState, background: &Background, sink: &mut impl RenderSink) {
    sink.clear(background);
    for ball in state.visible_balls() {
        sink.draw_ball(ball.pos.x, ball.pos.y, ball.radius, ball.fill);
    }
    sink.draw_hud(&Hud::from_state(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{on_click, tick_n};

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        balls: Vec<(f32, f32, f32, Rgb)>,
        huds: Vec<Hud>,
    }

    impl RenderSink for Recorder {
        fn clear(&mut self, _background: &Background) {
            self.clears += 1;
        }

        fn draw_ball(&mut self, x: f32, y: f32, radius: f32, fill: Rgb) {
            self.balls.push((x, y, radius, fill));
        }

        fn draw_hud(&mut self, hud: &Hud) {
            self.huds.push(hud.clone());
        }
    }

    #[test]
    fn test_present_draws_visible_balls_and_hud() {
        let mut state = GameState::new(5);
        let id = state.balls()[0].id;
        on_click(&mut state, id);

        let mut sink = Recorder::default();
        present(&state, &Background::default(), &mut sink);

        // Clicked ball is parked off-screen, only the replacement is drawn
        assert_eq!(sink.clears, 1);
        assert_eq!(sink.balls.len(), 1);
        assert_eq!(sink.balls[0].0, crate::consts::REPLACEMENT_SPAWN_X);
        assert_eq!(sink.huds[0].hits_text, "Hits: 1");
    }

    #[test]
    fn test_present_after_game_over_draws_no_balls() {
        let mut state = GameState::new(5);
        for _ in 0..5 {
            state.record_miss();
        }
        tick_n(&mut state, 3);

        let mut sink = Recorder::default();
        present(&state, &Background::default(), &mut sink);
        assert!(sink.balls.is_empty());
        assert_eq!(sink.huds[0].game_over_text.as_deref(), Some("Game Over"));
    }

    #[test]
    fn test_rgb_to_f32() {
        assert_eq!(Rgb::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.to_f32(), [0.0, 0.0, 0.0, 1.0]);
    }
}
