//! Game state and phase controller
//!
//! `GameState` is the single owner of scoring, pause and game-over state,
//! and of the ball collection. The tick and click handlers mutate it only
//! through the methods here, so the phase rules live in one place.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId};
use crate::render::Rgb;
use crate::settings::Playfield;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls drift, clicks score
    Playing,
    /// Loop stopped, clicks ignored
    Paused,
    /// Miss limit reached; only `reset` leaves this phase
    GameOver,
}

/// Run state of the per-frame simulation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Hit { ball: BallId, hits: u32 },
    Spawned { ball: BallId },
    Missed { ball: BallId, misses: u32 },
    GameOver { hits: u32 },
    Paused,
    Resumed,
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    playfield: Playfield,
    hits: u32,
    misses: u32,
    phase: GamePhase,
    loop_state: LoopState,
    /// Spawn order; appended on hits, replaced on reset
    pub(crate) balls: Vec<Ball>,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with default playfield rules
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(seed, Playfield::default())
    }

    pub fn with_playfield(seed: u64, playfield: Playfield) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield: playfield.sanitized(),
            hits: 0,
            misses: 0,
            phase: GamePhase::Playing,
            loop_state: LoopState::Stopped,
            balls: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_initial_ball();
        state.start_loop();

        state
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// All balls in spawn order, including parked ones
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Balls at least partly inside the visible playfield
    pub fn visible_balls(&self) -> impl Iterator<Item = &Ball> {
        let width = self.playfield.width;
        self.balls
            .iter()
            .filter(move |b| b.pos.x + b.radius >= 0.0 && b.pos.x - b.radius <= width)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn next_ball_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    fn random_spawn_y(&mut self) -> f32 {
        let (min, max) = (self.playfield.spawn_y_min, self.playfield.spawn_y_max);
        self.rng.random_range(min..max) as f32
    }

    /// The white ball every round starts with
    fn spawn_initial_ball(&mut self) -> BallId {
        let id = self.next_ball_id();
        let y = self.random_spawn_y();
        let ball = Ball::spawn(id, self.playfield.initial_spawn_x, y, self.playfield.ball_radius);
        self.balls.push(ball);
        self.events.push(GameEvent::Spawned { ball: id });
        id
    }

    /// A randomly colored ball near the left edge, appended after a hit
    pub(crate) fn spawn_replacement_ball(&mut self) -> BallId {
        let id = self.next_ball_id();
        let y = self.random_spawn_y();
        let fill = Rgb(self.rng.random(), self.rng.random(), self.rng.random());
        let ball = Ball::spawn(id, self.playfield.replacement_spawn_x, y, self.playfield.ball_radius)
            .with_fill(fill);
        self.balls.push(ball);
        self.events.push(GameEvent::Spawned { ball: id });
        log::debug!("Spawned ball {} at y={}", id.0, y);
        id
    }

    fn start_loop(&mut self) {
        self.loop_state = LoopState::Running;
    }

    fn stop_loop(&mut self) {
        self.loop_state = LoopState::Stopped;
    }

    /// Count a hit. Callers check the phase first.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a miss; the miss that reaches the limit ends the round
    pub fn record_miss(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.misses += 1;
        log::debug!("Miss {}/{}", self.misses, self.playfield.max_misses);
        if self.misses >= self.playfield.max_misses {
            self.enter_game_over();
        }
    }

    fn enter_game_over(&mut self) {
        self.stop_loop();
        self.phase = GamePhase::GameOver;
        let park_x = self.playfield.game_over_park_x;
        for ball in &mut self.balls {
            ball.park(park_x);
        }
        self.events.push(GameEvent::GameOver { hits: self.hits });
        log::info!("Game over with {} hits", self.hits);
    }

    /// Stop the loop. No-op unless playing.
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.stop_loop();
        self.phase = GamePhase::Paused;
        self.events.push(GameEvent::Paused);
        log::info!("Paused");
        true
    }

    /// Restart the loop. No-op unless paused.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.start_loop();
        self.events.push(GameEvent::Resumed);
        log::info!("Resumed");
        true
    }

    /// Pause button: flips between playing and paused, ignored after game over
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::GameOver => false,
        }
    }

    /// Start a fresh round from any phase
    pub fn reset(&mut self) {
        self.stop_loop();
        self.hits = 0;
        self.misses = 0;
        self.time_ticks = 0;
        self.balls.clear();
        self.spawn_initial_ball();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Reset);
        self.start_loop();
        log::info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_has_one_white_ball() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.is_running());
        assert_eq!(state.balls().len(), 1);

        let ball = &state.balls()[0];
        assert_eq!(ball.pos.x, INITIAL_SPAWN_X);
        assert_eq!(ball.radius, BALL_RADIUS);
        assert_eq!(ball.velocity(), 1);
        assert_eq!(ball.fill, Rgb::WHITE);
        assert!(ball.pos.y >= SPAWN_Y_MIN as f32 && ball.pos.y < SPAWN_Y_MAX as f32);
    }

    #[test]
    fn test_four_misses_keep_playing() {
        let mut state = GameState::new(1);
        for _ in 0..4 {
            state.record_miss();
        }
        assert_eq!(state.misses(), 4);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.is_running());
    }

    #[test]
    fn test_fifth_miss_ends_game() {
        let mut state = GameState::new(1);
        for _ in 0..5 {
            state.record_miss();
        }
        assert_eq!(state.misses(), 5);
        assert!(state.is_game_over());
        assert_eq!(state.loop_state(), LoopState::Stopped);
        assert!(state.balls().iter().all(|b| b.pos.x == GAME_OVER_PARK_X));
        assert!(state.events().contains(&GameEvent::GameOver { hits: 0 }));

        // Misses never exceed the limit
        state.record_miss();
        assert_eq!(state.misses(), 5);
    }

    #[test]
    fn test_pause_resume_toggles_loop() {
        let mut state = GameState::new(1);
        assert!(state.pause());
        assert!(state.is_paused());
        assert_eq!(state.loop_state(), LoopState::Stopped);
        assert!(!state.pause());

        assert!(state.resume());
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.is_running());
        assert!(!state.resume());

        assert!(state.toggle_pause());
        assert!(state.is_paused());
        assert!(state.toggle_pause());
        assert!(!state.is_paused());
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = GameState::new(1);
        for _ in 0..5 {
            state.record_miss();
        }
        assert!(!state.pause());
        assert!(!state.toggle_pause());
        assert!(state.is_game_over());
        assert!(!state.is_running());
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut playing = GameState::new(3);
        playing.record_hit();
        playing.spawn_replacement_ball();

        let mut paused = GameState::new(3);
        paused.record_miss();
        paused.pause();

        let mut over = GameState::new(3);
        for _ in 0..5 {
            over.record_miss();
        }

        for state in [&mut playing, &mut paused, &mut over] {
            state.reset();
            assert_eq!(state.hits(), 0);
            assert_eq!(state.misses(), 0);
            assert_eq!(state.phase(), GamePhase::Playing);
            assert!(state.is_running());
            assert_eq!(state.balls().len(), 1);
            assert_eq!(state.balls()[0].pos.x, INITIAL_SPAWN_X);
            assert_eq!(state.balls()[0].velocity(), 1);
        }
    }

    #[test]
    fn test_ids_stay_unique_across_reset() {
        let mut state = GameState::new(9);
        let first = state.balls()[0].id;
        state.reset();
        assert_ne!(state.balls()[0].id, first);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(1);
        let events = state.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::Spawned { .. }]));
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(42);
        let mut b = GameState::new(42);
        for _ in 0..10 {
            a.spawn_replacement_ball();
            b.spawn_replacement_ball();
        }
        assert_eq!(a.balls(), b.balls());
    }
}
