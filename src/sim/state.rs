//! Game state and core simulation types
//!
//! A whole run lives in one [`GameState`] value: no process-wide
//! singletons, so independent simulations can run side by side in
//! tests.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::camera::Camera;
use crate::Color;
use crate::config::Config;
use crate::consts::AIM_EPSILON;

/// The player-controlled entity. Created once at the world origin and
/// never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    /// Position in the unbounded world plane
    pub world_pos: Vec2,
    /// Where the player is drawn: `world_pos + camera.offset`,
    /// recomputed every tick
    pub display_pos: Vec2,
    pub radius: f32,
    /// Displacement per held direction key, units per tick
    pub speed: f32,
}

/// A projectile travelling in a straight world-space line
#[derive(Debug, Clone)]
pub struct Bullet {
    pub world_pos: Vec2,
    /// World-space velocity, units per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A pursuer that homes straight at the player
#[derive(Debug, Clone)]
pub struct Enemy {
    pub world_pos: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Pursuit speed, units per tick
    pub speed: f32,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u64,
    pub config: Config,
    pub camera: Camera,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Create a new run with the given seed. The player starts at the
    /// world origin, drawn at the viewport center.
    pub fn new(seed: u64, config: Config) -> Self {
        let camera = Camera::new(config.viewport, config.deadzone);
        let player = Player {
            world_pos: Vec2::ZERO,
            display_pos: camera.to_screen(Vec2::ZERO),
            radius: config.player_radius,
            speed: config.player_speed,
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            config,
            camera,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Fire a bullet toward a pointer position.
    ///
    /// The aim direction is `pointer - display_pos`: both points are
    /// screen-space, and a difference of two same-space points is a
    /// valid direction in either frame. The bullet itself spawns at
    /// the player's exact world position. A near-zero aim vector has
    /// no usable direction, so the shot is dropped rather than
    /// normalized into non-finite velocity.
    pub fn fire(&mut self, pointer_screen: Vec2) {
        let aim = pointer_screen - self.player.display_pos;
        if aim.length_squared() < AIM_EPSILON * AIM_EPSILON {
            log::debug!("dropped shot: pointer on top of player");
            return;
        }
        self.bullets.push(Bullet {
            world_pos: self.player.world_pos,
            vel: aim.normalize() * self.config.bullet_speed,
            radius: self.config.bullet_radius,
            color: Color::BULLET,
        });
    }

    /// Spawn one enemy at a uniformly random angle on the spawn ring,
    /// unless the live-enemy cap is reached.
    pub fn spawn_enemy(&mut self) {
        if self.enemies.len() >= self.config.max_enemies {
            log::debug!("enemy cap reached ({}), spawn skipped", self.config.max_enemies);
            return;
        }
        let angle = self.rng.random_range(0.0..TAU);
        self.spawn_enemy_at(angle);
    }

    /// Spawn one enemy on the ring at a fixed angle (radians)
    pub fn spawn_enemy_at(&mut self, angle: f32) {
        let pos = self.player.world_pos
            + Vec2::new(angle.cos(), angle.sin()) * self.config.enemy_spawn_distance;
        self.enemies.push(Enemy {
            world_pos: pos,
            radius: self.config.enemy_radius,
            color: Color::ENEMY,
            speed: self.config.enemy_speed,
        });
    }
}
