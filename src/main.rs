//! Click Ball entry point
//!
//! Runs a headless session: the autopilot stands in for the player and the
//! log stands in for the screen. A windowed frontend drives the same API.

use std::time::{Duration, Instant};

use click_ball::autopilot::Autopilot;
use click_ball::render::{LogSink, present};
use click_ball::sim::{GameEvent, GameState, tick};
use click_ball::{Background, Settings};

/// Pause the demo for a second every 20 seconds
const DEMO_PAUSE_EVERY_SECS: u64 = 20;

fn main() {
    env_logger::init();
    log::info!("Click Ball (headless) starting...");

    let settings = Settings::load();
    let background = Background::load(&settings.background_path);
    let seed = settings.effective_seed();
    log::info!("Seed: {}", seed);

    let mut game = GameState::with_playfield(seed, settings.playfield.clone());
    let frame_rate = u64::from(settings.frame_rate);
    let mut pilot = Autopilot::new(seed ^ 0x5eed, settings.demo_accuracy)
        .with_pause_schedule(DEMO_PAUSE_EVERY_SECS * frame_rate, frame_rate);
    let mut sink = LogSink::new();

    let frame_time = Duration::from_secs_f64(1.0 / frame_rate as f64);
    let mut next_frame = Instant::now();

    for _ in 0..settings.demo_frames {
        tick(&mut game);
        pilot.update(&mut game);
        present(&game, &background, &mut sink);

        for event in game.drain_events() {
            match event {
                GameEvent::GameOver { hits } => log::info!("Round over: {} hits", hits),
                other => log::debug!("{:?}", other),
            }
        }
        if game.is_game_over() {
            break;
        }

        next_frame += frame_time;
        if let Some(wait) = next_frame.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    log::info!(
        "Finished after {} frames: {} hits, {} misses, {} balls spawned",
        sink.frames(),
        game.hits(),
        game.misses(),
        game.balls().len()
    );
}
