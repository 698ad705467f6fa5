//! Data-driven game tuning
//!
//! Defaults mirror [`crate::consts`]; hosts can override individual
//! fields from JSON without restating the rest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport size in screen units, queried once at startup
    pub viewport: Vec2,
    /// Camera deadzone rectangle, always centered in the viewport
    pub deadzone: Vec2,
    pub player_radius: f32,
    /// Player displacement per held direction key, units per tick
    pub player_speed: f32,
    pub bullet_radius: f32,
    /// Muzzle speed, units per tick
    pub bullet_speed: f32,
    /// How far past the viewport edge a bullet may travel before removal
    pub bullet_cull_margin: f32,
    pub enemy_radius: f32,
    /// Pursuit speed, units per tick
    pub enemy_speed: f32,
    /// Radius of the spawn ring around the player
    pub enemy_spawn_distance: f32,
    /// Per-tick Bernoulli odds of spawning one enemy
    pub enemy_spawn_chance: f32,
    /// Live-enemy cap; spawning is a no-op once reached
    pub max_enemies: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            deadzone: Vec2::new(DEADZONE_WIDTH, DEADZONE_HEIGHT),
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_cull_margin: BULLET_CULL_MARGIN,
            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_distance: ENEMY_SPAWN_DISTANCE,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,
            max_enemies: MAX_ENEMIES,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
