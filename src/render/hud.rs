//! Score text shown above the playfield

use serde::Serialize;

use super::Rgb;
use crate::sim::GameState;

pub const GAME_OVER_TEXT: &str = "Game Over";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub hits_text: String,
    pub misses_text: String,
    /// Set once the round has ended
    pub game_over_text: Option<String>,
    pub paused: bool,
}

impl Hud {
    pub const HITS_COLOR: Rgb = Rgb::NAVY;
    pub const MISSES_COLOR: Rgb = Rgb::DARK_RED;
    pub const GAME_OVER_COLOR: Rgb = Rgb::FIREBRICK;

    pub fn from_state(state: &GameState) -> Self {
        Self {
            hits_text: format!("Hits: {}", state.hits()),
            misses_text: format!("Misses: {}", state.misses()),
            game_over_text: state.is_game_over().then(|| GAME_OVER_TEXT.to_string()),
            paused: state.is_paused(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::on_click;

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(1);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.hits_text, "Hits: 0");
        assert_eq!(hud.misses_text, "Misses: 0");
        assert_eq!(hud.game_over_text, None);

        let id = state.balls()[0].id;
        on_click(&mut state, id);
        state.record_miss();
        state.pause();
        let hud = Hud::from_state(&state);
        assert_eq!(hud.hits_text, "Hits: 1");
        assert_eq!(hud.misses_text, "Misses: 1");
        assert!(hud.paused);
    }

    #[test]
    fn test_hud_game_over_clears_on_reset() {
        let mut state = GameState::new(1);
        for _ in 0..5 {
            state.record_miss();
        }
        assert_eq!(Hud::from_state(&state).game_over_text.as_deref(), Some(GAME_OVER_TEXT));
        state.reset();
        assert_eq!(Hud::from_state(&state).game_over_text, None);
    }
}
