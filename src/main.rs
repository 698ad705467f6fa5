//! Drift Arena entry point
//!
//! Headless demo driver: stands in for the host's frame scheduler and
//! input provider, running a scripted run at a fixed frame cadence and
//! logging milestones. Embedders wire a real renderer and input source
//! through the library seams instead.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use drift_arena::Config;
use drift_arena::sim::{GameState, TickInput, tick};

/// Target frame cadence (~60 Hz)
const FRAME: Duration = Duration::from_millis(16);
const DEMO_FRAMES: u64 = 1800;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED);
    let mut state = GameState::new(seed, Config::default());
    log::info!("starting demo run, seed {seed}");

    let mut input = TickInput::default();
    for frame in 0..DEMO_FRAMES {
        let frame_start = Instant::now();

        // Scripted movement: sweep right, then drop down, then drift back
        input.right = frame % 600 < 240;
        input.down = (240..420).contains(&(frame % 600));
        input.left = frame % 600 >= 420;

        // Aim at the nearest enemy's screen position, fire every 15 frames
        input.pointer = state
            .enemies
            .iter()
            .map(|e| state.camera.to_screen(e.world_pos))
            .min_by(|a, b| {
                let pa = a.distance(state.player.display_pos);
                let pb = b.distance(state.player.display_pos);
                pa.total_cmp(&pb)
            })
            .unwrap_or(Vec2::new(600.0, 200.0));
        input.fire = frame % 15 == 0;

        tick(&mut state, &input);

        if frame % 300 == 0 {
            log::info!(
                "tick {}: score {} | {} enemies, {} bullets | player {:?}",
                state.time_ticks,
                state.score,
                state.enemies.len(),
                state.bullets.len(),
                state.player.world_pos,
            );
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }

    log::info!("demo finished after {} ticks", state.time_ticks);
    println!("final score: {}", state.score);
}
