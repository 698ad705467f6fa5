//! Per-frame simulation tick
//!
//! One tick runs to completion per scheduled frame, in a fixed order:
//! movement + camera follow, bullet advance, enemy pursuit, collision
//! resolution, stochastic spawn. Nothing suspends mid-tick and no
//! other writer exists, so the state needs no locking.

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_collisions;
use super::state::GameState;

/// Snapshot of the input-state provider for one tick.
///
/// The host samples its key-down set and pointer position into this
/// struct at the start of each frame; the tick consumes it whole.
/// `fire` is a one-shot edge; the driver decides when to raise it
/// again, and holding it high fires one bullet per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Last-known pointer position, viewport space
    pub pointer: Vec2,
    /// Fire a bullet toward `pointer` this tick
    pub fire: bool,
}

impl TickInput {
    /// Net per-tick displacement from the held direction keys.
    /// Opposite keys cancel; diagonals are deliberately not
    /// speed-normalized, so diagonal speed is `speed * sqrt(2)`.
    fn movement_delta(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        delta
    }
}

/// Advance the simulation by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // A fire edge arrived between frames: aim against the display
    // position as of the previous tick, like a click handler would.
    if input.fire {
        state.fire(input.pointer);
    }

    move_player(state, input);
    update_bullets(state);
    update_enemies(state);
    resolve_collisions(state);

    // Independent Bernoulli trial each tick
    if state.rng.random::<f32>() < state.config.enemy_spawn_chance {
        state.spawn_enemy();
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let delta = input.movement_delta(state.player.speed);
    let follow = state.camera.follow(state.player.world_pos, delta);
    state.player.world_pos = follow.world_pos;
    state.player.display_pos = state.camera.to_screen(state.player.world_pos);
}

/// Advance bullets and cull the ones whose screen projection has left
/// the viewport by more than the configured margin.
fn update_bullets(state: &mut GameState) {
    let camera = state.camera.clone();
    let margin = state.config.bullet_cull_margin;
    state.bullets.retain_mut(|bullet| {
        bullet.world_pos += bullet.vel;
        let screen = camera.to_screen(bullet.world_pos);
        screen.x >= -margin
            && screen.x <= camera.viewport.x + margin
            && screen.y >= -margin
            && screen.y <= camera.viewport.y + margin
    });
}

/// Pure pursuit: every enemy takes the bearing to the player's current
/// world position and advances by its speed. No steering, no
/// enemy-enemy collision. At close range the step overshoots and the
/// enemy oscillates across the player; that is expected.
fn update_enemies(state: &mut GameState) {
    let target = state.player.world_pos;
    for enemy in &mut state.enemies {
        let bearing = (target.y - enemy.world_pos.y).atan2(target.x - enemy.world_pos.x);
        enemy.world_pos += Vec2::new(bearing.cos(), bearing.sin()) * enemy.speed;
    }
}
